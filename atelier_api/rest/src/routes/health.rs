use std::sync::Arc;

use atelier_core_health_contracts::{HealthFeatureService, HealthStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    database: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { database, email } = service.get_status().await;

    let ok = database && email;

    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
        email,
    };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use atelier_core_health_contracts::MockHealthFeatureService;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn healthy() {
        let (status, body) = get(HealthStatus {
            database: true,
            email: true,
        })
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"http": true, "database": true, "email": true})
        );
    }

    #[tokio::test]
    async fn degraded() {
        let (status, body) = get(HealthStatus {
            database: true,
            email: false,
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"http": true, "database": true, "email": false})
        );
    }

    async fn get(status: HealthStatus) -> (StatusCode, Value) {
        let service = MockHealthFeatureService::new().with_get_status(status);

        let app = router(Arc::new(service));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
