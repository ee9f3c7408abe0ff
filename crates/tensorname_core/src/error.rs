use crate::backend::{Backend, DispatchKey};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnimplementedBackend(Backend),
    InvalidType(String),
    UnrecognizedDispatchKey(DispatchKey),
    InvalidDefaultType(String),
    Lock,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnimplementedBackend(backend) => write!(f, "Unimplemented backend {}", backend),
            Self::InvalidType(name) => write!(f, "invalid type: '{}'", name),
            Self::UnrecognizedDispatchKey(key) => {
                write!(f, "Unrecognized tensor type ID: {}", key)
            },
            Self::InvalidDefaultType(msg) => write!(f, "Invalid default type: {}", msg),
            Self::Lock => write!(f, "Default type configuration lock is poisoned"),
        }
    }
}

impl std::error::Error for Error {}
