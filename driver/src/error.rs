use std::num::ParseIntError;

use error_stack::Report;

use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Conversion(anyhow::Error),
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
    #[error(transparent)]
    Jwt(jsonwebtoken::errors::Error),
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<ParseIntError> for DriverError {
    fn from(value: ParseIntError) -> Self {
        Self::Conversion(anyhow::Error::new(value))
    }
}

impl From<std::net::AddrParseError> for DriverError {
    fn from(value: std::net::AddrParseError) -> Self {
        Self::Conversion(anyhow::Error::new(value))
    }
}

impl From<argon2::Error> for DriverError {
    fn from(value: argon2::Error) -> Self {
        Self::Conversion(anyhow::anyhow!("invalid argon2 parameters: {value}"))
    }
}

impl From<argon2::password_hash::Error> for DriverError {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

impl From<jsonwebtoken::errors::Error> for DriverError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(value)
    }
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Internal))
    }
}
