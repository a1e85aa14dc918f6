use thiserror::Error;

/// Rejected preview limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitsError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}
