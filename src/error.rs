use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("({x}, {y}) is not in the grid")]
    OutOfBounds { x: i32, y: i32 },
}

pub type Result<T> = core::result::Result<T, GridError>;
