use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Requested accuracy order is outside the documented input domain.
    InvalidOrder(usize),
    /// Grip metrics are undefined over an empty coefficient vector.
    EmptyCoefficients,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidOrder(order) => {
                write!(f, "order must be at least 1, got {order}")
            }
            KernelError::EmptyCoefficients => write!(f, "coefficient vector is empty"),
        }
    }
}

impl std::error::Error for KernelError {}

pub type Result<T> = std::result::Result<T, KernelError>;
