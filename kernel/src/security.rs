use crate::entity::{AccessToken, PasswordHash, UserName};
use crate::KernelError;

pub trait PasswordHasher: 'static + Sync + Send {
    fn hash(&self, password: &str) -> error_stack::Result<PasswordHash, KernelError>;
    /// `Ok(false)` on mismatch; errors are reserved for unreadable hashes.
    fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnPasswordHasher: 'static + Sync + Send {
    type PasswordHasher: PasswordHasher;
    fn password_hasher(&self) -> &Self::PasswordHasher;
}

pub trait TokenIssuer: 'static + Sync + Send {
    fn issue(&self, name: &UserName) -> error_stack::Result<AccessToken, KernelError>;
    /// Returns the subject of a well-formed, correctly signed, unexpired token and
    /// fails with [`KernelError::Unauthorized`] otherwise.
    fn verify(&self, token: &AccessToken) -> error_stack::Result<UserName, KernelError>;
}

pub trait DependOnTokenIssuer: 'static + Sync + Send {
    type TokenIssuer: TokenIssuer;
    fn token_issuer(&self) -> &Self::TokenIssuer;
}
