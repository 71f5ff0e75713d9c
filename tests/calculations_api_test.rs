// Integration tests for the calculation endpoints
// Drives the full router in-process and checks payload shapes and error codes

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gainstracker::config::environment::ServerConfig;
use gainstracker::database::Database;
use gainstracker::server::{HttpServer, ServerResources};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

async fn test_router() -> Router {
    let database = Database::new("sqlite::memory:").await.unwrap();
    let resources = Arc::new(ServerResources::new(database, ServerConfig::default()));
    HttpServer::new(resources).router()
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_bmi_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/bmi?weight_kg=70&height_cm=175",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!((body["data"]["value"].as_f64().unwrap() - 22.86).abs() < 1e-9);
    assert_eq!(body["data"]["category"], json!("normal"));
}

#[tokio::test]
async fn test_bmi_missing_parameter() {
    let router = test_router().await;
    let (status, body) = get_json(router, "/api/calculations/bmi?weight_kg=70").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("MISSING_REQUIRED_FIELD"));
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("height_cm"));
}

#[tokio::test]
async fn test_bmr_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/bmr?weight_kg=70&height_cm=175&age=30&sex=male",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["bmr"].as_f64().unwrap() - 1695.67).abs() < 1e-9);
}

#[tokio::test]
async fn test_bmr_rejects_unknown_sex() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/bmr?weight_kg=70&height_cm=175&age=30&sex=other",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_SEX"));
}

#[tokio::test]
async fn test_tdee_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/tdee?weight_kg=70&height_cm=175&age=30&sex=male&activity_level=moderately_active",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 1695.67 * 1.55 = 2628.2885 -> 2628.29
    assert!((body["data"]["value"].as_f64().unwrap() - 2628.29).abs() < 1e-9);
    assert_eq!(body["data"]["activity_level"], json!("moderately_active"));
}

#[tokio::test]
async fn test_tdee_endpoint_accepts_bmr_directly() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/tdee?bmr=1695.1&activity_level=sedentary",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["value"].as_f64().unwrap() - 2034.12).abs() < 1e-9);
    assert!((body["data"]["bmr"].as_f64().unwrap() - 1695.1).abs() < 1e-9);
}

#[tokio::test]
async fn test_tdee_without_bmr_or_profile_names_missing_parameter() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/tdee?activity_level=sedentary",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("MISSING_REQUIRED_FIELD"));
    assert!(body["error"]["message"].as_str().unwrap().contains("bmr"));
}

#[tokio::test]
async fn test_tdee_rejects_unknown_activity_level() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/tdee?weight_kg=70&height_cm=175&age=30&sex=male&activity_level=heroic",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_ACTIVITY_LEVEL"));
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("sedentary"));
}

#[tokio::test]
async fn test_calorie_goal_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/calorie-goal?weight_kg=70&height_cm=175&age=30&sex=male&activity_level=sedentary&goal=lose",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 1695.67 * 1.2 = 2034.804 -> 2034.8, minus 500
    assert!((body["data"]["calorie_target"].as_f64().unwrap() - 1534.8).abs() < 1e-9);
    assert_eq!(body["data"]["goal"], json!("lose"));
}

#[tokio::test]
async fn test_calorie_goal_endpoint_accepts_tdee_directly() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/calorie-goal?tdee=2000&goal=lose",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["calorie_target"].as_f64().unwrap() - 1500.0).abs() < 1e-9);
    assert!((body["data"]["tdee"].as_f64().unwrap() - 2000.0).abs() < 1e-9);

    let router = test_router().await;
    let (status, body) = get_json(router, "/api/calculations/calorie-goal?goal=lose").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].as_str().unwrap().contains("tdee"));
}

#[tokio::test]
async fn test_macros_endpoint_with_defaults() {
    let router = test_router().await;
    let (status, body) = get_json(router, "/api/calculations/macros?calories=2000").await;

    assert_eq!(status, StatusCode::OK);
    // Defaults 30/40/30 protein/carb/fat
    assert!((body["data"]["protein"]["grams"].as_f64().unwrap() - 150.0).abs() < 1e-9);
    assert!((body["data"]["carbs"]["grams"].as_f64().unwrap() - 200.0).abs() < 1e-9);
    assert!((body["data"]["fat"]["grams"].as_f64().unwrap() - 66.67).abs() < 1e-9);
}

#[tokio::test]
async fn test_macros_endpoint_accepts_calorie_target_alias() {
    let router = test_router().await;
    let (status, body) = get_json(router, "/api/calculations/macros?calorie_target=2000").await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["protein"]["grams"].as_f64().unwrap() - 150.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_macros_endpoint_rejects_bad_ratios() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/macros?calorie_target=2000&protein_pct=30&carb_pct=30&fat_pct=30",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_RATIOS"));
}

#[tokio::test]
async fn test_calories_burned_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/calories-burned?weight_kg=70&duration_min=60&intensity=moderate",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["calories"].as_f64().unwrap() - 420.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_protein_needs_endpoint() {
    let router = test_router().await;
    let (status, body) = get_json(
        router,
        "/api/calculations/protein-needs?weight_kg=70&goal=maintain&intensity=sedentary",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["data"]["recommended_g"].as_f64().unwrap() - 56.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_daily_analysis_endpoint() {
    let router = test_router().await;
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculations/daily-analysis")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "meals": [
                            { "calories": 600, "protein_g": 40, "carbs_g": 50, "fat_g": 20 },
                            { "calories": 400, "protein_g": 10, "carbs_g": 50, "fat_g": 30 }
                        ]
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["meal_count"], json!(2));
    assert!((body["data"]["totals"]["calories"].as_f64().unwrap() - 1000.0).abs() < 1e-9);
    assert!(
        (body["data"]["distribution"]["carbs_percent"].as_f64().unwrap() - 50.0).abs() < 1e-9
    );
}

#[tokio::test]
async fn test_index_and_health_endpoints() {
    let router = test_router().await;

    let (status, body) = get_json(router.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("running"));

    let (status, body) = get_json(router.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));

    let (status, body) = get_json(router, "/api/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ready"));
    assert_eq!(body["database"], json!("connected"));
}
