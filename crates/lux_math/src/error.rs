use thiserror::Error;

/// Contract violations reported by the checked vector operations.
///
/// The operator forms (`/`, `/=`, `[]`, `unit_vector`) never return these;
/// they fail fast instead. Use the `checked_*`/`try_*`/`get*` variants when
/// a recoverable error is wanted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("index {0} out of range for Vec3 (expected 0, 1 or 2)")]
    IndexOutOfRange(usize),
}

pub type MathResult<T> = Result<T, MathError>;
