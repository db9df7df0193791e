use error_stack::Report;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use kernel::interface::security::TokenIssuer;
use kernel::prelude::entity::{AccessToken, UserName};
use kernel::KernelError;

use crate::config::JwtConfig;
use crate::error::{ConvertError, DriverError};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// HS256 JWTs whose subject is the user name.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.ttl,
        }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self::new(JwtConfig::from_env()?))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, name: &UserName) -> error_stack::Result<AccessToken, KernelError> {
        let now = OffsetDateTime::now_utc();
        let subject: &String = name.as_ref();
        let claims = Claims {
            sub: subject.clone(),
            iat: now.unix_timestamp(),
            exp: (now + self.ttl).unix_timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(AccessToken::new(token))
    }

    fn verify(&self, token: &AccessToken) -> error_stack::Result<UserName, KernelError> {
        let raw: &String = token.as_ref();
        let data = decode::<Claims>(raw, &self.decoding, &self.validation).map_err(|error| {
            Report::new(DriverError::from(error)).change_context(KernelError::Unauthorized)
        })?;
        Ok(UserName::new(data.claims.sub))
    }
}

#[cfg(test)]
mod test {
    use time::Duration;

    use kernel::interface::security::TokenIssuer;
    use kernel::prelude::entity::{AccessToken, UserName};
    use kernel::KernelError;

    use crate::config::JwtConfig;
    use crate::security::JwtTokenIssuer;

    fn issuer(secret: &str, ttl: Duration) -> JwtTokenIssuer {
        JwtTokenIssuer::new(JwtConfig {
            secret: secret.to_string(),
            ttl,
        })
    }

    fn is_unauthorized<T>(result: error_stack::Result<T, KernelError>) -> bool {
        matches!(
            result,
            Err(ref report) if matches!(report.current_context(), KernelError::Unauthorized)
        )
    }

    #[test]
    fn issue_and_verify() -> error_stack::Result<(), KernelError> {
        let issuer = issuer("secret", Duration::hours(1));
        let token = issuer.issue(&UserName::new("alice"))?;
        assert_eq!(issuer.verify(&token)?, UserName::new("alice"));
        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> error_stack::Result<(), KernelError> {
        let issuer = issuer("secret", Duration::minutes(-5));
        let token = issuer.issue(&UserName::new("alice"))?;
        assert!(is_unauthorized(issuer.verify(&token)));
        Ok(())
    }

    #[test]
    fn foreign_signature_is_rejected() -> error_stack::Result<(), KernelError> {
        let token = issuer("other", Duration::hours(1)).issue(&UserName::new("alice"))?;
        let issuer = issuer("secret", Duration::hours(1));
        assert!(is_unauthorized(issuer.verify(&token)));
        Ok(())
    }

    #[test]
    fn garbage_is_rejected() {
        let issuer = issuer("secret", Duration::hours(1));
        assert!(is_unauthorized(
            issuer.verify(&AccessToken::new("not-a-jwt"))
        ));
        assert!(is_unauthorized(issuer.verify(&AccessToken::new(""))));
    }
}
