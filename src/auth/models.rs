//! Authentication Models
//! Mission: Define the token payload and login wire types

use serde::{Deserialize, Serialize};

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    pub iat: i64, // issued-at timestamp
    pub exp: i64, // expiration timestamp
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: String,
    pub password: String,
}

/// Successful login response. The dual-token variant returns an
/// access/refresh pair; the single-token variant returns `{token}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TokenGrant {
    Pair {
        #[serde(rename = "accessToken")]
        access_token: String,
        #[serde(rename = "refreshToken")]
        refresh_token: String,
    },
    Single { token: String },
}

impl TokenGrant {
    /// The token the client presents on protected routes.
    pub fn access_token(&self) -> &str {
        match self {
            TokenGrant::Pair { access_token, .. } => access_token,
            TokenGrant::Single { token } => token,
        }
    }
}

/// Refresh request body. The field is optional so a missing token is
/// reported as its own 401 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

/// Refresh response
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_grant_serialization() {
        let grant = TokenGrant::Pair {
            access_token: "aaa".to_string(),
            refresh_token: "rrr".to_string(),
        };

        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["accessToken"], "aaa");
        assert_eq!(json["refreshToken"], "rrr");
        assert!(json.get("token").is_none());
    }

    #[test]
    fn test_single_grant_serialization() {
        let grant = TokenGrant::Single {
            token: "ttt".to_string(),
        };

        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["token"], "ttt");
        assert!(json.get("accessToken").is_none());
    }

    #[test]
    fn test_refresh_request_field_optional() {
        let present: RefreshRequest =
            serde_json::from_str(r#"{"refreshToken": "abc"}"#).unwrap();
        assert_eq!(present.refresh_token.as_deref(), Some("abc"));

        let missing: RefreshRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.refresh_token.is_none());
    }
}
