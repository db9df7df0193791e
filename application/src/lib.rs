pub mod service;
pub mod transfer;

#[cfg(test)]
pub(crate) mod test {
    use time::Duration;

    use driver::config::JwtConfig;
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
    use kernel::interface::update::{
        DependOnCartModifier, DependOnOrderModifier, DependOnUserModifier,
    };

    pub struct TestModule {
        database: InMemoryDatabase,
        password_hasher: Argon2PasswordHasher,
        token_issuer: JwtTokenIssuer,
    }

    /// Services wired to `database`, with a cheap hashing cost.
    pub fn module(database: InMemoryDatabase) -> TestModule {
        TestModule {
            database,
            password_hasher: Argon2PasswordHasher::with_cost(8, 1).expect("valid argon2 cost"),
            token_issuer: JwtTokenIssuer::new(JwtConfig {
                secret: "test-secret".to_string(),
                ttl: Duration::hours(1),
            }),
        }
    }

    impl DependOnDatabaseConnection for TestModule {
        type DatabaseConnection = InMemoryDatabase;
        fn database_connection(&self) -> &Self::DatabaseConnection {
            &self.database
        }
    }

    impl DependOnUserQuery for TestModule {
        type UserQuery = InMemoryUserRepository;
        fn user_query(&self) -> &Self::UserQuery {
            &InMemoryUserRepository
        }
    }

    impl DependOnUserModifier for TestModule {
        type UserModifier = InMemoryUserRepository;
        fn user_modifier(&self) -> &Self::UserModifier {
            &InMemoryUserRepository
        }
    }

    impl DependOnItemQuery for TestModule {
        type ItemQuery = InMemoryItemRepository;
        fn item_query(&self) -> &Self::ItemQuery {
            &InMemoryItemRepository
        }
    }

    impl DependOnCartQuery for TestModule {
        type CartQuery = InMemoryCartRepository;
        fn cart_query(&self) -> &Self::CartQuery {
            &InMemoryCartRepository
        }
    }

    impl DependOnCartModifier for TestModule {
        type CartModifier = InMemoryCartRepository;
        fn cart_modifier(&self) -> &Self::CartModifier {
            &InMemoryCartRepository
        }
    }

    impl DependOnOrderQuery for TestModule {
        type OrderQuery = InMemoryOrderRepository;
        fn order_query(&self) -> &Self::OrderQuery {
            &InMemoryOrderRepository
        }
    }

    impl DependOnOrderModifier for TestModule {
        type OrderModifier = InMemoryOrderRepository;
        fn order_modifier(&self) -> &Self::OrderModifier {
            &InMemoryOrderRepository
        }
    }

    impl DependOnPasswordHasher for TestModule {
        type PasswordHasher = Argon2PasswordHasher;
        fn password_hasher(&self) -> &Self::PasswordHasher {
            &self.password_hasher
        }
    }

    impl DependOnTokenIssuer for TestModule {
        type TokenIssuer = JwtTokenIssuer;
        fn token_issuer(&self) -> &Self::TokenIssuer {
            &self.token_issuer
        }
    }
}
