use std::net::SocketAddr;
use std::path::PathBuf;

use error_stack::Report;
use time::Duration;

use kernel::KernelError;

use crate::error::{ConvertError, DriverError};
use crate::{env, env_opt};

const SERVER_ADDR: &str = "SERVER_ADDR";
const LOG_DIR: &str = "LOG_DIR";
const SEED_USERNAME: &str = "SEED_USERNAME";
const SEED_PASSWORD: &str = "SEED_PASSWORD";
const JWT_SECRET: &str = "JWT_SECRET";
const JWT_TTL_SECS: &str = "JWT_TTL_SECS";
const ARGON2_MEMORY_KIB: &str = "ARGON2_MEMORY_KIB";
const ARGON2_ITERATIONS: &str = "ARGON2_ITERATIONS";

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_DIR: &str = "./logs/";
const DEFAULT_JWT_TTL_SECS: i64 = 3600;

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_dir: PathBuf,
    pub seed_user: Option<SeedUser>,
}

#[derive(Debug, Clone)]
pub struct SeedUser {
    pub name: String,
    pub password: String,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::load().convert_error()
    }

    fn load() -> Result<Self, DriverError> {
        let addr = env_opt(SERVER_ADDR)?
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_ADDR)
            .parse::<SocketAddr>()?;
        let log_dir = env_opt(LOG_DIR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
        let seed_user = match env_opt(SEED_USERNAME)? {
            Some(name) => Some(SeedUser {
                name,
                password: env(SEED_PASSWORD)?,
            }),
            None => None,
        };
        Ok(Self {
            addr,
            log_dir,
            seed_user,
        })
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl: Duration,
}

impl JwtConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let secret = env(JWT_SECRET).convert_error()?;
        if secret.is_empty() {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("{JWT_SECRET} must not be empty")));
        }
        let ttl = env_opt(JWT_TTL_SECS)
            .and_then(|ttl| {
                ttl.map(|ttl| ttl.parse::<i64>())
                    .transpose()
                    .map_err(DriverError::from)
            })
            .convert_error()?
            .unwrap_or(DEFAULT_JWT_TTL_SECS);
        Ok(Self {
            secret,
            ttl: Duration::seconds(ttl),
        })
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Argon2id cost parameters. Defaults follow the argon2 crate's recommendation.
#[derive(Debug, Clone, Copy)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
        }
    }
}

impl PasswordConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::load().convert_error()
    }

    fn load() -> Result<Self, DriverError> {
        let default = Self::default();
        let memory_kib = match env_opt(ARGON2_MEMORY_KIB)? {
            Some(value) => value.parse()?,
            None => default.memory_kib,
        };
        let iterations = match env_opt(ARGON2_ITERATIONS)? {
            Some(value) => value.parse()?,
            None => default.iterations,
        };
        Ok(Self {
            memory_kib,
            iterations,
        })
    }
}
