//! HTTP routes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use roster_domain::{Player, PlayerInput};

use crate::app::App;
use crate::use_cases::management::PlayerError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/rest/players", get(list_players).post(create_player))
        .route("/rest/players/count", get(count_players))
        .route(
            "/rest/players/{id}",
            get(get_player).post(update_player).delete(delete_player),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Players
// =============================================================================

async fn list_players(
    State(app): State<Arc<App>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = app.use_cases.management.player.list(&params).await?;
    Ok(Json(players))
}

async fn count_players(
    State(app): State<Arc<App>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<usize>, ApiError> {
    let count = app.use_cases.management.player.count(&params).await?;
    Ok(Json(count))
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(input) = body?;
    let player = app.use_cases.management.player.create(input).await?;
    Ok(Json(player))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = app.use_cases.management.player.get(parse_id(&id)?).await?;
    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;
    // Unknown ids are reported before a malformed body.
    app.use_cases.management.player.get(id).await?;
    let Json(input) = body?;
    let player = app.use_cases.management.player.update(id, input).await?;
    Ok(Json(player))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    app.use_cases
        .management
        .player
        .delete(parse_id(&id)?)
        .await?;
    Ok(())
}

/// Path ids arrive as text; anything that is not an integer is an invalid id.
fn parse_id(raw: &str) -> Result<i64, PlayerError> {
    raw.trim()
        .parse()
        .map_err(|_| PlayerError::InvalidId(raw.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<PlayerError> for ApiError {
    fn from(e: PlayerError) -> Self {
        match e {
            PlayerError::IdNotFound(_) => ApiError::NotFound(e.to_string()),
            PlayerError::InvalidParameter { .. }
            | PlayerError::InvalidId(_)
            | PlayerError::ValidationFailed(_) => ApiError::BadRequest(e.to_string()),
            PlayerError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Validation failed: {}", e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::EngineConfig;
    use crate::infrastructure::memory::InMemoryPlayerRepo;

    fn router() -> Router {
        let app = App::new(
            Arc::new(InMemoryPlayerRepo::new()),
            &EngineConfig::default(),
        );
        routes().with_state(Arc::new(app))
    }

    async fn send(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    fn candidate(name: &str, experience: i64) -> Value {
        json!({
            "name": name,
            "title": "Son of Gloin",
            "race": "DWARF",
            "profession": "WARRIOR",
            "birthday": 1_100_000_000_000_i64,
            "experience": experience,
        })
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = send(&router(), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn root_path_is_not_routed() {
        let (status, _) = send(&router(), "GET", "/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_checks_id_before_decoding_body() {
        let router = router();
        let bad_body = json!({ "race": "BALROG" });

        let (status, body) =
            send(&router, "POST", "/rest/players/999999", Some(bad_body.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"Player not found: 999999");

        let (status, _) = send(&router, "POST", "/rest/players/0", Some(bad_body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        send(&router, "POST", "/rest/players", Some(candidate("Gimli", 0))).await;
        let (status, body) = send(&router, "POST", "/rest/players/1", Some(bad_body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8_lossy(&body).starts_with("Validation failed"));
    }

    #[tokio::test]
    async fn create_then_get() {
        let router = router();

        let (status, body) =
            send(&router, "POST", "/rest/players", Some(candidate("Gimli", 1500))).await;
        assert_eq!(status, StatusCode::OK);
        let created = json_body(&body);
        assert_eq!(created["id"], 1);
        assert_eq!(created["level"], 5);
        assert_eq!(created["untilNextLevel"], 600);
        assert_eq!(created["banned"], false);
        assert_eq!(created["birthday"], 1_100_000_000_000_i64);

        let (status, body) = send(&router, "GET", "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), created);
    }

    #[tokio::test]
    async fn id_errors_map_to_status_codes() {
        let router = router();

        for uri in ["/rest/players/0", "/rest/players/-3", "/rest/players/abc"] {
            let (status, _) = send(&router, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }

        let (status, _) = send(&router, "GET", "/rest/players/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, "DELETE", "/rest/players/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_bodies_are_bad_requests() {
        let router = router();

        let too_long = candidate("Thirteen-char", 0);
        let (status, _) = send(&router, "POST", "/rest/players", Some(too_long)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut unknown_race = candidate("Gimli", 0);
        unknown_race["race"] = json!("BALROG");
        let (status, _) = send(&router, "POST", "/rest/players", Some(unknown_race)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&router, "GET", "/rest/players/count", None).await;
        assert_eq!(json_body(&body), 0);
    }

    #[tokio::test]
    async fn list_count_update_delete() {
        let router = router();
        for (name, experience) in [("Gimli", 100_000), ("Gloin", 0), ("Balin", 100)] {
            send(&router, "POST", "/rest/players", Some(candidate(name, experience))).await;
        }

        let (status, body) = send(&router, "GET", "/rest/players?order=EXPERIENCE", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<Value> = json_body(&body)
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("Gloin"), json!("Balin"), json!("Gimli")]);

        let uri = "/rest/players/count?minExperience=100&pageSize=1";
        let (_, body) = send(&router, "GET", uri, None).await;
        assert_eq!(json_body(&body), 2);

        let (status, _) = send(&router, "GET", "/rest/players?race=UNKNOWN_VALUE", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            send(&router, "POST", "/rest/players/2", Some(json!({ "banned": true }))).await;
        assert_eq!(status, StatusCode::OK);
        let updated = json_body(&body);
        assert_eq!(updated["id"], 2);
        assert_eq!(updated["name"], "Gloin");
        assert_eq!(updated["banned"], true);

        let (status, _) = send(&router, "DELETE", "/rest/players/2", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&router, "GET", "/rest/players/count", None).await;
        assert_eq!(json_body(&body), 2);
    }
}
