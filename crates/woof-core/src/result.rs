use crate::error::WoofError;

pub type Result<T> = std::result::Result<T, WoofError>;
