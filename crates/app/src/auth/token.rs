//! Guest token signing and verification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

use vista::grants::{GuestToken, GuestTokenResource, GuestTokenUser};

/// Value of the `type` claim on every guest token.
pub const GUEST_TOKEN_TYPE: &str = "guest";

/// Default audience when none is configured.
pub const DEFAULT_GUEST_TOKEN_AUDIENCE: &str = "vista";

/// Default token lifetime in seconds.
pub const DEFAULT_GUEST_TOKEN_TTL_SECONDS: i64 = 300;

/// HMAC secret used to sign guest tokens.
#[derive(Clone)]
pub struct GuestTokenSecret {
    bytes: Vec<u8>,
}

impl GuestTokenSecret {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            bytes: secret.into().into_bytes(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for GuestTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GuestTokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for GuestTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Claims carried by a signed guest token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestTokenClaims {
    #[serde(default)]
    pub user: GuestTokenUser,

    pub resources: Vec<GuestTokenResource>,

    /// Issued at, seconds since the epoch.
    pub iat: i64,

    /// Expiry, seconds since the epoch.
    pub exp: i64,

    pub aud: String,

    #[serde(rename = "type")]
    pub token_type: String,
}

impl GuestTokenClaims {
    /// Drop the envelope claims, keeping the `{user, resources}` payload.
    #[must_use]
    pub fn into_guest_token(self) -> GuestToken {
        GuestToken {
            user: self.user,
            resources: self.resources,
        }
    }
}

#[derive(Debug, Error)]
pub enum GuestTokenError {
    #[error("guest token could not be signed")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("guest token is invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token of type {0:?} is not a guest token")]
    WrongType(String),

    #[error("guest token lifetime is out of range")]
    Lifetime(#[source] jiff::Error),
}

/// A freshly signed guest token and the claims it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedGuestToken {
    pub token: String,
    pub claims: GuestTokenClaims,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

/// HS256 guest token codec bound to one secret and audience.
#[derive(Clone)]
pub struct GuestTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    audience: String,
    ttl: SignedDuration,
}

impl GuestTokenCodec {
    #[must_use]
    pub fn new(secret: &GuestTokenSecret, audience: impl Into<String>, ttl: SignedDuration) -> Self {
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            audience,
            ttl,
        }
    }

    /// Sign a guest token valid from now for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, token: GuestToken) -> Result<SignedGuestToken, GuestTokenError> {
        self.issue_at(token, Timestamp::now())
    }

    /// Sign a guest token as if issued at `issued_at`, truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails or the expiry is not a valid timestamp.
    pub fn issue_at(
        &self,
        token: GuestToken,
        issued_at: Timestamp,
    ) -> Result<SignedGuestToken, GuestTokenError> {
        let issued_at =
            Timestamp::from_second(issued_at.as_second()).map_err(GuestTokenError::Lifetime)?;
        let expires_at = issued_at
            .checked_add(self.ttl)
            .map_err(GuestTokenError::Lifetime)?;

        let claims = GuestTokenClaims {
            user: token.user,
            resources: token.resources,
            iat: issued_at.as_second(),
            exp: expires_at.as_second(),
            aud: self.audience.clone(),
            token_type: GUEST_TOKEN_TYPE.to_string(),
        };

        let encoded = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(GuestTokenError::Encode)?;

        Ok(SignedGuestToken {
            token: encoded,
            claims,
            issued_at,
            expires_at,
        })
    }

    /// Verify signature, expiry, audience and token type.
    ///
    /// # Errors
    ///
    /// Returns an error if the token fails any check.
    pub fn decode(&self, token: &str) -> Result<GuestTokenClaims, GuestTokenError> {
        let claims = jsonwebtoken::decode::<GuestTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(GuestTokenError::Invalid)?
            .claims;

        if claims.token_type != GUEST_TOKEN_TYPE {
            return Err(GuestTokenError::WrongType(claims.token_type));
        }

        Ok(claims)
    }
}

impl fmt::Debug for GuestTokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestTokenCodec")
            .field("audience", &self.audience)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
