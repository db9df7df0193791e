use error_stack::Report;
use tracing::info;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::security::{DependOnPasswordHasher, PasswordHasher};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, GetUserByNameDto, GetUserDto, UserDto};

pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Fixed path segments living next to `/:username` routes. A user with one of
/// these names could never be addressed by name.
pub const RESERVED_NAMES: [&str; 4] = ["create", "authenticate", "addToCart", "removeFromCart"];

#[async_trait::async_trait]
pub trait UserDirectory:
    'static + Sync + Send + DependOnUserQuery + DependOnUserModifier + DependOnPasswordHasher
{
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        if dto.password != dto.confirm_password {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Password and confirmation do not match"));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        let name = UserName::new(dto.name);
        if name.is_blank() {
            return Err(
                Report::new(KernelError::Validation).attach_printable("Username must not be blank")
            );
        }
        let raw: &String = name.as_ref();
        if RESERVED_NAMES.contains(&raw.as_str()) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Username {raw} is reserved")));
        }

        let password = self.password_hasher().hash(&dto.password)?;

        let mut connection = self.database_connection().transact().await?;
        let user = self
            .user_modifier()
            .create(&mut connection, &name, &password)
            .await?;
        connection.commit().await?;

        info!("Created user {} with id {}", name.as_ref(), user.id().as_ref());
        Ok(UserDto::from(user))
    }

    async fn find_user_by_id(&self, dto: GetUserDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("User id {} not found", dto.id))
            })?;
        connection.commit().await?;

        Ok(UserDto::from(user))
    }

    async fn find_user_by_name(
        &self,
        dto: GetUserByNameDto,
    ) -> error_stack::Result<UserDto, KernelError> {
        let user = locate_user(self, &dto.name).await?;
        Ok(UserDto::from(user))
    }
}

impl<T> UserDirectory for T where
    T: DependOnUserQuery + DependOnUserModifier + DependOnPasswordHasher
{
}

/// Resolves `name` in its own short transaction. Users are never deleted, so the
/// result stays valid for follow-up transactions.
pub(crate) async fn locate_user<T>(module: &T, name: &str) -> error_stack::Result<User, KernelError>
where
    T: DependOnUserQuery + ?Sized,
{
    let mut connection = module.database_connection().transact().await?;

    let name = UserName::new(name);
    let user = module
        .user_query()
        .find_by_name(&mut connection, &name)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("User {} not found", name.as_ref()))
        })?;
    connection.commit().await?;

    Ok(user)
}
