use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The identity a token asserts: which account, under which role.
///
/// Serialized into the JWT payload as `{"role": "admin"|"user", "sub": id}`,
/// so a decoded token always carries its role tag. Authorization checks
/// branch on the variant; a user token can never pass for an admin one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "sub", rename_all = "snake_case")]
pub enum Principal {
    Admin(Uuid),
    User(Uuid),
}

impl Principal {
    /// The account id this principal refers to, regardless of role.
    pub fn id(&self) -> Uuid {
        match self {
            Principal::Admin(id) | Principal::User(id) => *id,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin(_))
    }
}

/// JWT claims: a principal plus issuance and expiry timestamps.
///
/// `extra` is a nested claim for anything callers want to carry along; the
/// token service round-trips it untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(flatten)]
    pub principal: Principal,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Additional custom claims
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create claims for a principal, expiring `ttl` from now.
    pub fn new(principal: Principal, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            principal,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            extra: HashMap::new(),
        }
    }

    /// Add a custom claim.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expire_after_ttl() {
        let principal = Principal::User(Uuid::new_v4());
        let claims = Claims::new(principal, Duration::hours(24));

        assert_eq!(claims.principal, principal);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_principal_role_tag_round_trips() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(Principal::Admin(id)).unwrap();

        assert_eq!(json["role"], "admin");
        assert_eq!(json["sub"], id.to_string());

        let back: Principal = serde_json::from_value(json).unwrap();
        assert_eq!(back, Principal::Admin(id));
        assert!(back.is_admin());
    }

    #[test]
    fn test_user_and_admin_are_distinct_for_same_id() {
        let id = Uuid::new_v4();
        assert_ne!(Principal::Admin(id), Principal::User(id));
        assert!(!Principal::User(id).is_admin());
        assert_eq!(Principal::User(id).id(), id);
    }

    #[test]
    fn test_with_extra() {
        let claims =
            Claims::new(Principal::User(Uuid::new_v4()), Duration::hours(1)).with_extra("hotel", "seaside");

        assert_eq!(
            claims.extra.get("hotel").and_then(|v| v.as_str()),
            Some("seaside")
        );
    }
}
