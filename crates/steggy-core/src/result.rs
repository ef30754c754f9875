use crate::error::SteggyError;

pub type Result<T> = std::result::Result<T, SteggyError>;
