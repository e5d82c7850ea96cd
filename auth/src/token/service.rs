use std::collections::HashMap;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::Principal;
use super::errors::TokenError;

/// Issues and validates signed bearer tokens (HS256).
///
/// Built once at startup from the configured secret and time-to-live and
/// shared for the process lifetime; the key is never rotated. Tokens have
/// exactly two states: valid (signature matches, not expired) and invalid.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from a signing secret and token lifetime.
    ///
    /// The secret should be at least 256 bits and come from configuration,
    /// never from code.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a token for a principal, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, principal: Principal) -> Result<String, TokenError> {
        self.encode(&Claims::new(principal, self.ttl))
    }

    /// Issue a token carrying additional custom claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_extra(
        &self,
        principal: Principal,
        extra: HashMap<String, serde_json::Value>,
    ) -> Result<String, TokenError> {
        let mut claims = Claims::new(principal, self.ttl);
        claims.extra = extra;
        self.encode(&claims)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// An unverified payload is never exposed: a bad signature, a malformed
    /// token, and an expired one all fail here.
    ///
    /// # Errors
    /// * `Expired` - The token's `exp` has passed
    /// * `Invalid` - Signature mismatch or malformed token
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_decode_round_trip() {
        let service = TokenService::new(SECRET, Duration::hours(1));

        let principal = Principal::User(Uuid::new_v4());
        let token = service.issue(principal).expect("Failed to issue token");

        let claims = service.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.principal, principal);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_role_tag_survives_round_trip() {
        let service = TokenService::new(SECRET, Duration::hours(1));
        let id = Uuid::new_v4();

        let admin_token = service.issue(Principal::Admin(id)).unwrap();
        let user_token = service.issue(Principal::User(id)).unwrap();

        assert!(service.decode(&admin_token).unwrap().principal.is_admin());
        assert!(!service.decode(&user_token).unwrap().principal.is_admin());
    }

    #[test]
    fn test_decode_malformed_token() {
        let service = TokenService::new(SECRET, Duration::hours(1));

        let result = service.decode("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = TokenService::new(SECRET, Duration::hours(1));
        let verifier = TokenService::new(b"another_secret_at_least_32_bytes!!", Duration::hours(1));

        let token = issuer.issue(Principal::User(Uuid::new_v4())).unwrap();

        let result = verifier.decode(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_decode_mutated_token() {
        let service = TokenService::new(SECRET, Duration::hours(1));

        let token = service.issue(Principal::User(Uuid::new_v4())).unwrap();
        let mut mutated = token.into_bytes();
        let last = mutated.len() - 1;
        mutated[last] = if mutated[last] == b'A' { b'B' } else { b'A' };
        let mutated = String::from_utf8(mutated).unwrap();

        assert!(service.decode(&mutated).is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        // A negative TTL produces a token that expired in the past, beyond
        // the default validation leeway.
        let service = TokenService::new(SECRET, Duration::hours(-1));

        let token = service.issue(Principal::Admin(Uuid::new_v4())).unwrap();

        let result = service.decode(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_extra_claims_round_trip() {
        let service = TokenService::new(SECRET, Duration::hours(1));

        let mut extra = HashMap::new();
        extra.insert("hotel".to_string(), serde_json::json!("seaside"));

        let token = service
            .issue_with_extra(Principal::User(Uuid::new_v4()), extra)
            .unwrap();

        let claims = service.decode(&token).unwrap();
        assert_eq!(
            claims.extra.get("hotel").and_then(|v| v.as_str()),
            Some("seaside")
        );
    }
}
