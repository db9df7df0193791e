use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash as PhcString, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};

use kernel::interface::security::PasswordHasher;
use kernel::prelude::entity::PasswordHash;
use kernel::KernelError;

use crate::config::PasswordConfig;
use crate::error::{ConvertError, DriverError};

/// Argon2id with a random salt per password, stored in PHC string format.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new(config: PasswordConfig) -> error_stack::Result<Self, KernelError> {
        Self::with_cost(config.memory_kib, config.iterations)
    }

    pub fn with_cost(memory_kib: u32, iterations: u32) -> error_stack::Result<Self, KernelError> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> error_stack::Result<PasswordHash, KernelError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(PasswordHash::new(hash.to_string()))
    }

    fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> error_stack::Result<bool, KernelError> {
        let phc: &String = hash.as_ref();
        let parsed = PhcString::new(phc)
            .map_err(DriverError::from)
            .convert_error()?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(error) => Err(DriverError::from(error)).convert_error(),
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::security::PasswordHasher;
    use kernel::prelude::entity::PasswordHash;
    use kernel::KernelError;

    use crate::security::Argon2PasswordHasher;

    fn hasher() -> error_stack::Result<Argon2PasswordHasher, KernelError> {
        Argon2PasswordHasher::with_cost(8, 1)
    }

    #[test]
    fn hash_and_verify() -> error_stack::Result<(), KernelError> {
        let hasher = hasher()?;
        let hash = hasher.hash("pw123456")?;

        let phc: &String = hash.as_ref();
        assert!(phc.starts_with("$argon2id$"));
        assert!(hasher.verify("pw123456", &hash)?);
        assert!(!hasher.verify("pw1234567", &hash)?);
        Ok(())
    }

    #[test]
    fn salts_differ() -> error_stack::Result<(), KernelError> {
        let hasher = hasher()?;
        let first = hasher.hash("pw123456")?;
        let second = hasher.hash("pw123456")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn unreadable_hash_is_an_error() -> error_stack::Result<(), KernelError> {
        let hasher = hasher()?;
        let result = hasher.verify("pw123456", &PasswordHash::new("plain"));
        assert!(matches!(
            result,
            Err(ref report) if matches!(report.current_context(), KernelError::Internal)
        ));
        Ok(())
    }

    #[test]
    fn rejects_invalid_cost() {
        assert!(Argon2PasswordHasher::with_cost(0, 0).is_err());
    }
}
