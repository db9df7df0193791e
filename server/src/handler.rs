use std::ops::Deref;
use std::sync::Arc;

use driver::config::PasswordConfig;
use driver::database::{
    InMemoryCartRepository, InMemoryDatabase, InMemoryItemRepository, InMemoryOrderRepository,
    InMemoryUserRepository,
};
use driver::security::{Argon2PasswordHasher, JwtTokenIssuer};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{
    DependOnCartQuery, DependOnItemQuery, DependOnOrderQuery, DependOnUserQuery,
};
use kernel::interface::security::{DependOnPasswordHasher, DependOnTokenIssuer};
use kernel::interface::update::{DependOnCartModifier, DependOnOrderModifier, DependOnUserModifier};
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self::from(Handler::init()?))
    }
}

impl From<Handler> for AppModule {
    fn from(handler: Handler) -> Self {
        Self(Arc::new(handler))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: InMemoryDatabase,
    password_hasher: Argon2PasswordHasher,
    token_issuer: JwtTokenIssuer,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let password_hasher = Argon2PasswordHasher::new(PasswordConfig::from_env()?)?;
        let token_issuer = JwtTokenIssuer::from_env()?;

        Ok(Self::new(
            InMemoryDatabase::default(),
            password_hasher,
            token_issuer,
        ))
    }

    pub fn new(
        database: InMemoryDatabase,
        password_hasher: Argon2PasswordHasher,
        token_issuer: JwtTokenIssuer,
    ) -> Self {
        Self {
            database,
            password_hasher,
            token_issuer,
        }
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier for Handler {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnItemQuery for Handler {
    type ItemQuery = InMemoryItemRepository;
    fn item_query(&self) -> &Self::ItemQuery {
        &InMemoryItemRepository
    }
}

impl DependOnCartQuery for Handler {
    type CartQuery = InMemoryCartRepository;
    fn cart_query(&self) -> &Self::CartQuery {
        &InMemoryCartRepository
    }
}

impl DependOnCartModifier for Handler {
    type CartModifier = InMemoryCartRepository;
    fn cart_modifier(&self) -> &Self::CartModifier {
        &InMemoryCartRepository
    }
}

impl DependOnOrderQuery for Handler {
    type OrderQuery = InMemoryOrderRepository;
    fn order_query(&self) -> &Self::OrderQuery {
        &InMemoryOrderRepository
    }
}

impl DependOnOrderModifier for Handler {
    type OrderModifier = InMemoryOrderRepository;
    fn order_modifier(&self) -> &Self::OrderModifier {
        &InMemoryOrderRepository
    }
}

impl DependOnPasswordHasher for Handler {
    type PasswordHasher = Argon2PasswordHasher;
    fn password_hasher(&self) -> &Self::PasswordHasher {
        &self.password_hasher
    }
}

impl DependOnTokenIssuer for Handler {
    type TokenIssuer = JwtTokenIssuer;
    fn token_issuer(&self) -> &Self::TokenIssuer {
        &self.token_issuer
    }
}
