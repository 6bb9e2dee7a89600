//! JWT claim structures.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClaimsUser {
    pub id: Uuid,
}

/// Access token claims.
///
/// Only the user id is embedded; everything else about the user is looked
/// up per request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user: ClaimsUser,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_nest_user_id() {
        let id = Uuid::new_v4();
        let claims = Claims {
            user: ClaimsUser { id },
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_value(&claims).unwrap();
        assert_eq!(serialized["user"]["id"], id.to_string());
        assert_eq!(serialized["exp"], 1234567890);
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"user":{"id":"6f0e6a62-4a0d-4a55-9a4c-0d4a7f1f2b11"},"exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(
            claims.user_id().to_string(),
            "6f0e6a62-4a0d-4a55-9a4c-0d4a7f1f2b11"
        );
        assert_eq!(claims.iat, 9999999900);
    }
}
