//! Authentication Module
//! Mission: Issue, refresh, and verify the gateway's signed tokens

pub mod credentials;
pub mod issuer;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use credentials::CredentialTable;
pub use issuer::SessionIssuer;
pub use jwt::TokenCodec;
pub use middleware::access_guard;
