use thiserror::Error;

/// Errors raised by the conversion core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("invalid {name} = {value}: {reason}")]
    Validation {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("unsupported time unit: '{0}'")]
    UnsupportedUnit(String),
    #[error("invalid quantity: '{0}'")]
    InvalidQuantity(String),
    #[error("{operation} overflowed the supported numeric range")]
    Overflow { operation: &'static str },
}

impl ConvertError {
    pub(crate) fn negative(name: &'static str, value: impl ToString) -> Self {
        Self::Validation {
            name,
            value: value.to_string(),
            reason: "must not be negative",
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
