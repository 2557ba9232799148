pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications;
use crate::auth;
use crate::jobs;
use crate::resumes;
use crate::state::AppState;
use crate::templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/signup", post(auth::handlers::handle_signup))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .route("/api/auth/me", get(auth::handlers::handle_me))
        // Resumes: AI analysis
        .route("/api/resumes/analyze", post(resumes::handlers::handle_analyze))
        .route(
            "/api/resumes/match-job",
            post(resumes::handlers::handle_match_job),
        )
        .route(
            "/api/resumes/rewrite",
            post(resumes::handlers::handle_rewrite),
        )
        // Resumes: CRUD
        .route(
            "/api/resumes",
            post(resumes::handlers::handle_create_resume)
                .get(resumes::handlers::handle_list_resumes),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handlers::handle_get_resume)
                .delete(resumes::handlers::handle_delete_resume),
        )
        // Jobs (public)
        .route("/api/jobs", get(jobs::handlers::handle_list_jobs))
        .route("/api/jobs/:id", get(jobs::handlers::handle_get_job))
        // Applications
        .route(
            "/api/applications",
            post(applications::handlers::handle_create_application)
                .get(applications::handlers::handle_list_applications),
        )
        // Templates (static catalog)
        .route("/api/templates", get(templates::handle_list_templates))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::db::Store;
    use crate::llm_client::LlmClient;

    // The mongodb client connects lazily, so routes that never reach a
    // handler (or never touch the store) can be exercised without a server.
    async fn test_state() -> AppState {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .expect("client options should parse");
        AppState {
            store: Store::new(&client.database("careerlaunch_test")),
            llm: LlmClient::new("test-key".to_string()),
            config: Config::for_tests(),
        }
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_templates_are_public() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_routes_reject_missing_token() {
        let app = build_router(test_state().await);

        for uri in ["/api/auth/me", "/api/resumes", "/api/applications"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_garbage_bearer_token_rejected() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header("Authorization", "Bearer not-a-real-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_analyze_requires_auth_before_reading_body() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/resumes/analyze")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
