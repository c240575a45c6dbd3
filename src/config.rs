//! Gateway Configuration
//! Mission: Load all runtime knobs once at startup from the environment

/// Application configuration
///
/// Secrets, TTLs and the refresh-token flag are fixed for the lifetime
/// of the process; no rotation and no per-tenant keys.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
    /// When false the gateway runs the single-token variant: the login
    /// response is `{token}` and the refresh-token route is not mounted.
    pub issue_refresh_token: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let access_secret =
            std::env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| "secret".to_string());

        let refresh_secret =
            std::env::var("REFRESH_TOKEN_SECRET").unwrap_or_else(|_| "refreshSecret".to_string());

        // 15 minutes; the single-token deployment historically ran 6 hours
        // (21600) and selects that through this knob.
        let access_ttl_secs = std::env::var("ACCESS_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(900);

        // 7 days
        let refresh_ttl_secs = std::env::var("REFRESH_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(604_800);

        let issue_refresh_token = std::env::var("ISSUE_REFRESH_TOKEN")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "on" | "ON"))
            .unwrap_or(true);

        Ok(Self {
            port,
            access_secret,
            refresh_secret,
            access_ttl_secs,
            refresh_ttl_secs,
            issue_refresh_token,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            access_secret: "secret".to_string(),
            refresh_secret: "refreshSecret".to_string(),
            access_ttl_secs: 900,
            refresh_ttl_secs: 604_800,
            issue_refresh_token: true,
        }
    }
}
