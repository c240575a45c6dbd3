//! Session Issuer
//! Mission: Turn valid credentials into signed token grants

use crate::auth::{
    credentials::CredentialTable,
    jwt::{TokenCodec, TokenError},
    models::TokenGrant,
};
use crate::config::Config;
use anyhow::Result;
use chrono::Duration;
use tracing::warn;

/// Why a refresh attempt failed.
#[derive(Debug)]
pub enum RefreshError {
    /// The presented refresh token did not verify (bad signature,
    /// malformed, or past expiry).
    InvalidOrExpired,
    /// Minting the replacement access token failed.
    Internal,
}

/// Issues access tokens (and optionally refresh tokens) for validated
/// credentials. One issuer serves both deployment variants; the
/// single-token variant simply never mints a refresh token.
pub struct SessionIssuer {
    credentials: CredentialTable,
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
    issue_refresh: bool,
}

impl SessionIssuer {
    pub fn new(credentials: CredentialTable, config: &Config) -> Self {
        Self {
            credentials,
            access_codec: TokenCodec::new(config.access_secret.clone()),
            refresh_codec: TokenCodec::new(config.refresh_secret.clone()),
            access_ttl: Duration::seconds(config.access_ttl_secs),
            refresh_ttl: Duration::seconds(config.refresh_ttl_secs),
            issue_refresh: config.issue_refresh_token,
        }
    }

    pub fn issues_refresh(&self) -> bool {
        self.issue_refresh
    }

    /// Validate credentials and mint a grant. `None` means the
    /// credentials were rejected; the caller maps that to a 401.
    pub fn authenticate(&self, role: &str, password: &str) -> Result<Option<TokenGrant>> {
        if !self.credentials.validate(role, password) {
            warn!("❌ Failed login attempt for role: {}", role);
            return Ok(None);
        }

        let access_token = self.access_codec.sign(role, self.access_ttl)?;

        let grant = if self.issue_refresh {
            TokenGrant::Pair {
                access_token,
                refresh_token: self.refresh_codec.sign(role, self.refresh_ttl)?,
            }
        } else {
            TokenGrant::Single {
                token: access_token,
            }
        };

        Ok(Some(grant))
    }

    /// Exchange a refresh token for a fresh access token carrying the
    /// same role claim.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, RefreshError> {
        let claims = self
            .refresh_codec
            .verify(refresh_token)
            .map_err(|_: TokenError| RefreshError::InvalidOrExpired)?;

        self.access_codec
            .sign(&claims.role, self.access_ttl)
            .map_err(|e| {
                warn!("Failed to mint access token on refresh: {}", e);
                RefreshError::Internal
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_issuer(issue_refresh: bool) -> SessionIssuer {
        let config = Config {
            issue_refresh_token: issue_refresh,
            ..Config::default()
        };
        SessionIssuer::new(CredentialTable::default(), &config)
    }

    #[test]
    fn test_authenticate_unknown_role_is_none() {
        let issuer = test_issuer(true);

        assert!(issuer.authenticate("root", "anything").unwrap().is_none());
        assert!(issuer.authenticate("", "").unwrap().is_none());
    }

    #[test]
    fn test_authenticate_wrong_password_is_none() {
        let issuer = test_issuer(true);

        assert!(issuer.authenticate("admin", "nope").unwrap().is_none());
    }

    #[test]
    fn test_authenticate_mints_verifiable_access_token() {
        let issuer = test_issuer(true);
        let codec = TokenCodec::new("secret");

        let grant = issuer.authenticate("admin", "admin").unwrap().unwrap();
        let claims = codec.verify(grant.access_token()).unwrap();
        assert_eq!(claims.role, "admin");

        match grant {
            TokenGrant::Pair { refresh_token, .. } => {
                // Refresh token is signed with the other secret
                assert_eq!(
                    codec.verify(&refresh_token).unwrap_err(),
                    TokenError::InvalidSignature
                );
            }
            TokenGrant::Single { .. } => panic!("expected dual-token grant"),
        }
    }

    #[test]
    fn test_single_variant_mints_single_grant() {
        let issuer = test_issuer(false);

        let grant = issuer.authenticate("dev", "dev").unwrap().unwrap();
        assert!(matches!(grant, TokenGrant::Single { .. }));

        let claims = TokenCodec::new("secret")
            .verify(grant.access_token())
            .unwrap();
        assert_eq!(claims.role, "dev");
    }

    #[test]
    fn test_refresh_mints_new_access_token() {
        let issuer = test_issuer(true);

        let grant = issuer.authenticate("admin", "admin").unwrap().unwrap();
        let refresh_token = match grant {
            TokenGrant::Pair { refresh_token, .. } => refresh_token,
            TokenGrant::Single { .. } => panic!("expected dual-token grant"),
        };

        let access = issuer.refresh(&refresh_token).unwrap();
        let claims = TokenCodec::new("secret").verify(&access).unwrap();
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let issuer = test_issuer(true);

        // An access token must not pass as a refresh token
        let grant = issuer.authenticate("admin", "admin").unwrap().unwrap();
        let result = issuer.refresh(grant.access_token());
        assert!(matches!(result, Err(RefreshError::InvalidOrExpired)));
    }

    #[test]
    fn test_refresh_rejects_garbage() {
        let issuer = test_issuer(true);

        let result = issuer.refresh("not.a.token");
        assert!(matches!(result, Err(RefreshError::InvalidOrExpired)));
    }
}
