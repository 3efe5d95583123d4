use crate::{
    AppState, create_profile, delete_me, express_interest, get_me, get_own_profile, get_profile,
    get_recommendations, health, list_matches, list_notifications, list_profiles, login,
    mark_read, register, update_me, update_profile,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Accounts
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route(
            "/api/v1/users/me",
            get(get_me).put(update_me).delete(delete_me),
        )
        // Profiles
        .route(
            "/api/v1/profile",
            get(get_own_profile).post(create_profile).put(update_profile),
        )
        .route("/api/v1/profiles", get(list_profiles))
        .route("/api/v1/profiles/{user_id}", get(get_profile))
        .route("/api/v1/recommendations", get(get_recommendations))
        // Interest and matches
        .route(
            "/api/v1/notifications",
            get(list_notifications).post(express_interest),
        )
        .route("/api/v1/notifications/{id}/read", post(mark_read))
        .route("/api/v1/matches", get(list_matches))
        .with_state(state)
        // The frontend is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
