use error_stack::Report;
use tracing::debug;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::security::{
    DependOnPasswordHasher, DependOnTokenIssuer, PasswordHasher, TokenIssuer,
};
use kernel::prelude::entity::{AccessToken, UserName};
use kernel::KernelError;

use crate::transfer::{AuthenticateDto, TokenDto};

#[async_trait::async_trait]
pub trait AuthenticationService:
    'static + Sync + Send + DependOnUserQuery + DependOnPasswordHasher + DependOnTokenIssuer
{
    /// Exchanges credentials for a token. Unknown users and wrong passwords fail
    /// identically with [`KernelError::Unauthorized`].
    async fn authenticate(&self, dto: AuthenticateDto) -> error_stack::Result<TokenDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let name = UserName::new(dto.name);
        let user = self.user_query().find_by_name(&mut connection, &name).await?;
        connection.commit().await?;

        let rejected = || {
            Report::new(KernelError::Unauthorized)
                .attach_printable(format!("Bad credentials for {}", name.as_ref()))
        };
        let user = user.ok_or_else(rejected)?;
        if !self
            .password_hasher()
            .verify(&dto.password, user.password())?
        {
            return Err(rejected());
        }

        let token = self.token_issuer().issue(user.name())?;
        debug!("Issued token for {}", name.as_ref());
        Ok(TokenDto {
            token: token.into(),
        })
    }

    /// Resolves the username a token was issued for.
    fn validate(&self, token: &str) -> error_stack::Result<String, KernelError> {
        let name = self.token_issuer().verify(&AccessToken::new(token))?;
        Ok(name.into())
    }
}

impl<T> AuthenticationService for T where
    T: DependOnUserQuery + DependOnPasswordHasher + DependOnTokenIssuer
{
}
