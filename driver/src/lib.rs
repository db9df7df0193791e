use crate::error::DriverError;

pub mod config;
pub mod database;
pub mod error;
pub mod security;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}

/// Like [`env`], but an unset variable yields `None` instead of an error.
pub(crate) fn env_opt(key: &str) -> Result<Option<String>, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(DriverError::from(error)),
    }
}
