use derive_more::From;

use sparsegrid_core::SparseGridError;

pub type Result<T> = core::result::Result<T, GridIoError>;

#[derive(Debug, From)]
pub enum GridIoError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    SparseGrid(SparseGridError),

    // -- Grid text
    Parse {
        row: usize,
        col: usize,
        token: String,
    },

    UnexpectedEof {
        row: usize,
        col: usize,
    },
}

// region:    --- Error Boilerplate

impl core::fmt::Display for GridIoError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            GridIoError::Io(err) => write!(fmt, "I/O error: {err}"),
            GridIoError::SparseGrid(err) => write!(fmt, "{err}"),
            GridIoError::Parse { row, col, token } => {
                write!(fmt, "Invalid integer '{token}' at ({row}, {col})")
            }
            GridIoError::UnexpectedEof { row, col } => {
                write!(fmt, "Grid ended early: no value for ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for GridIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridIoError::Io(err) => Some(err),
            GridIoError::SparseGrid(err) => Some(err),
            _ => None,
        }
    }
}

// endregion: --- Error Boilerplate
