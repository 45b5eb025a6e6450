//! Weight storage handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::models::{InsertAck, NewWeight, RangeQuery, WeightRecord};
use crate::{AppResult, AppState};

/// List every stored reading, newest first
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WeightRecord>>> {
    let records = WeightRecord::list_all(&state.pool).await?;
    Ok(Json(records))
}

/// List readings inside an inclusive millisecond-epoch range
pub async fn filter(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> AppResult<Json<Vec<WeightRecord>>> {
    let (start, end) = range.bounds()?;
    let records = WeightRecord::list_between(&state.pool, start, end).await?;
    Ok(Json(records))
}

/// Store a reading stamped with the current server time
pub async fn create(
    State(state): State<AppState>,
    Json(entry): Json<NewWeight>,
) -> AppResult<Json<InsertAck>> {
    let stored = WeightRecord::append(&state.pool, entry.weight).await?;

    Ok(Json(InsertAck {
        weight: stored.weight,
        timestamp: stored.timestamp,
        test: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    use crate::{config::Config, create_router, model_client::ModelClient, AppState};

    async fn test_state() -> AppState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::run_migrations(&pool).await.unwrap();

        AppState {
            pool,
            config: Config {
                database_url: "sqlite::memory:".to_string(),
                port: 0,
                model_url: "http://127.0.0.1:9".to_string(),
            },
            model_client: ModelClient::new("http://127.0.0.1:9".to_string()),
        }
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(Request::get("/weights/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn filter_rejects_missing_bound() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::get("/weights/filter/?start_date=100000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("start_date and end_date"));
    }

    #[tokio::test]
    async fn filter_returns_window_descending() {
        let state = test_state().await;
        for (secs, weight) in [(100, 1.0), (200, 2.0), (300, 1.5)] {
            sqlx::query("INSERT INTO weights (weight, timestamp) VALUES ($1, $2)")
                .bind(weight)
                .bind(chrono::DateTime::from_timestamp(secs, 0).unwrap())
                .execute(&state.pool)
                .await
                .unwrap();
        }
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::get("/weights/filter/?start_date=100000&end_date=300000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let weights: Vec<f64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["weight"].as_f64().unwrap())
            .collect();
        assert_eq!(weights, vec![1.5, 2.0, 1.0]);
    }

    #[tokio::test]
    async fn create_echoes_insert() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(
                Request::post("/weights/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"weight": 4.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["weight"].as_f64(), Some(4.5));
        assert!(json["timestamp"].is_string());
        assert!(json["test"].is_string());
    }
}
