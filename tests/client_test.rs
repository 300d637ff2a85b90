use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use typifier::server::{router, AppState};
use typifier::{categories, ClientError, Pipeline, TypifierClient};

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn trained_state(examples: Vec<(&str, &str)>) -> AppState {
    let pipeline = Pipeline::builder()
        .add_examples(examples)
        .and_then(|builder| builder.build())
        .expect("Failed to train pipeline");
    AppState::new(pipeline)
}

#[tokio::test]
async fn test_get_uuid_parses_known_category() {
    let state = trained_state(vec![
        ("butter", "dairy & chilled"),
        ("buttermilch", "dairy & chilled"),
        ("milch", "dairy & chilled"),
        ("kaffee", "coffee & tea"),
        ("kaffeebohnen", "coffee & tea"),
        ("tee", "coffee & tea"),
    ]);
    let client = TypifierClient::new(spawn(router(state)).await);

    let uuid = client.get_uuid("Kaffee").await.unwrap();
    assert_eq!(uuid, categories::lookup("coffee & tea").unwrap());
}

#[tokio::test]
async fn test_get_uuid_null_is_invalid() {
    let state = trained_state(vec![
        ("fernseher", "electronics"),
        ("radio", "electronics"),
        ("puppe", "toys"),
        ("ball", "toys"),
    ]);
    let client = TypifierClient::new(spawn(router(state)).await);

    let result = client.get_uuid("radio").await;
    assert!(matches!(result, Err(ClientError::InvalidUuid(None))));
}

#[tokio::test]
async fn test_get_uuid_malformed_is_invalid() {
    let app = Router::new().route(
        "/",
        post(|Json(body): Json<Value>| async move {
            Json(json!({"product": body["product"], "type": "bakery", "uuid": "not-a-uuid"}))
        }),
    );
    let client = TypifierClient::new(spawn(app).await);

    match client.get_uuid("brot").await {
        Err(ClientError::InvalidUuid(Some(raw))) => assert_eq!(raw, "not-a-uuid"),
        other => panic!("expected invalid uuid, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_uuid_server_error_is_request_error() {
    let app = Router::new().route(
        "/",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "boom"}))) }),
    );
    let client = TypifierClient::new(spawn(app).await);

    let result = client.get_uuid("brot").await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}
