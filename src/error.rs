use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{operation}` is not supported by `{type_name}`")]
    Unsupported {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("Illegal state for `{operation}`: {reason}")]
    IllegalState {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("Underlying structure modified during traversal: expected version `{expected}` but found `{found}`")]
    ConcurrentModification { expected: u64, found: u64 },
}

impl Error {
    /// `operation` is not implemented by `T`; the message carries `T`'s
    /// type name.
    pub fn unsupported<T: ?Sized>(operation: &'static str) -> Error {
        Error::Unsupported {
            operation,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// True for the error kind returned by default capabilities.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }

    /// Name of the cursor operation that failed, if the error is tied to one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Unsupported { operation, .. } | Error::IllegalState { operation, .. } => {
                Some(operation)
            }
            Error::ConcurrentModification { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = result::Result<T, E>;
