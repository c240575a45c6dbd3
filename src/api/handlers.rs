//! API Handlers
//! Mission: Map HTTP requests onto the issuer and the static directory

use crate::auth::{
    issuer::RefreshError,
    models::{LoginRequest, RefreshRequest, RefreshResponse, TokenGrant},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::routes::AppState;
use crate::directory::{Admin, Customer};

/// Wrapper matching the `{data: ...}` shape of every resource response.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// Service metadata and route catalog - GET /
pub async fn root_catalog(State(state): State<AppState>) -> Json<Value> {
    let mut routes = vec![
        json!({
            "method": "GET",
            "path": "/api/login/ping",
            "description": "Returns 'pong'",
        }),
        json!({
            "method": "POST",
            "path": "/api/login/authenticate",
            "description": "Authenticates user credentials and returns a JWT token",
            "example_payload": { "role": "admin", "password": "admin" },
        }),
    ];

    if state.issues_refresh {
        routes.push(json!({
            "method": "POST",
            "path": "/api/login/refresh-token",
            "description": "Refreshes the access token using the refresh token",
            "example_payload": { "refreshToken": "yourRefreshToken" },
        }));
    }

    routes.extend([
        json!({
            "method": "GET",
            "path": "/api/admin",
            "description": "Retrieves all admins (requires authentication)",
        }),
        json!({
            "method": "GET",
            "path": "/api/admin/:id",
            "description": "Retrieves a specific admin by ID (requires authentication)",
        }),
        json!({
            "method": "GET",
            "path": "/api/customers",
            "description": "Retrieves all customers (requires authentication)",
        }),
        json!({
            "method": "GET",
            "path": "/api/customers/:id",
            "description": "Retrieves a specific customer by ID (requires authentication)",
        }),
    ]);

    Json(json!({
        "base_local_url": state.base_url,
        "routes": routes,
    }))
}

/// Liveness probe - GET /api/login/ping
pub async fn ping() -> &'static str {
    "pong"
}

/// Login endpoint - POST /api/login/authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenGrant>, ApiError> {
    info!("🔐 Login attempt for role: {}", payload.role);

    let grant = state
        .issuer
        .authenticate(&payload.role, &payload.password)
        .map_err(|_| ApiError::Internal)?
        .ok_or(ApiError::InvalidCredentials)?;

    info!("✅ Login successful for role: {}", payload.role);

    Ok(Json(grant))
}

/// Token refresh endpoint - POST /api/login/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let refresh_token = payload
        .refresh_token
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingRefreshToken)?;

    let access_token = state.issuer.refresh(&refresh_token).map_err(|e| match e {
        RefreshError::InvalidOrExpired => ApiError::InvalidRefreshToken,
        RefreshError::Internal => ApiError::Internal,
    })?;

    Ok(Json(RefreshResponse { access_token }))
}

/// List admins - GET /api/admin
pub async fn list_admins(State(state): State<AppState>) -> Json<DataBody<Vec<Admin>>> {
    Json(DataBody {
        data: state.directory.admins().to_vec(),
    })
}

/// Get one admin - GET /api/admin/:id
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataBody<Admin>>, ApiError> {
    state
        .directory
        .admin(&id)
        .cloned()
        .map(|data| Json(DataBody { data }))
        .ok_or(ApiError::NotFound("Admin"))
}

/// List customers - GET /api/customers
pub async fn list_customers(State(state): State<AppState>) -> Json<DataBody<Vec<Customer>>> {
    Json(DataBody {
        data: state.directory.customers().to_vec(),
    })
}

/// Get one customer - GET /api/customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataBody<Customer>>, ApiError> {
    state
        .directory
        .customer(&id)
        .cloned()
        .map(|data| Json(DataBody { data }))
        .ok_or(ApiError::NotFound("Customer"))
}

/// Handler-level failures
#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    MissingRefreshToken,
    InvalidRefreshToken,
    NotFound(&'static str),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::MissingRefreshToken => {
                (StatusCode::UNAUTHORIZED, "Refresh token missing".to_string())
            }
            ApiError::InvalidRefreshToken => (
                StatusCode::FORBIDDEN,
                "Invalid or expired refresh token".to_string(),
            ),
            ApiError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_responses() {
        let invalid_creds = ApiError::InvalidCredentials.into_response();
        assert_eq!(invalid_creds.status(), StatusCode::UNAUTHORIZED);

        let missing_refresh = ApiError::MissingRefreshToken.into_response();
        assert_eq!(missing_refresh.status(), StatusCode::UNAUTHORIZED);

        let invalid_refresh = ApiError::InvalidRefreshToken.into_response();
        assert_eq!(invalid_refresh.status(), StatusCode::FORBIDDEN);

        let not_found = ApiError::NotFound("Admin").into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = ApiError::Internal.into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_data_body_shape() {
        let body = DataBody {
            data: Admin {
                id: "1".to_string(),
                name: "John".to_string(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"]["id"], "1");
        assert_eq!(json["data"]["name"], "John");
    }
}
