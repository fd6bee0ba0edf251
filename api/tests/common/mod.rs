#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::HeaderMap,
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use gutflix_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const COMPLETION: &str = r#"{
    "reactions": [
        {"character": "Gut Flora Fiona 🦠", "dialogue": "Reinforcements!", "timestamp": 0, "mood": "excited", "emoji": "🎉"},
        {"character": "Taste Bud Tim 👅", "dialogue": "Fizzy and sour.", "timestamp": 2, "mood": "confused", "emoji": "🤔"},
        {"character": "Liver Larry 🍵", "dialogue": "A quiet day for once.", "timestamp": 4, "mood": "happy", "emoji": "😌"}
    ],
    "medical_context": "Fermented foods carry live cultures that support gut flora.",
    "humor_level": 8
}"#;

/// Stand-in for the Azure OpenAI chat completions endpoint.
#[derive(Clone)]
pub struct MockAzure {
    pub url: String,
    hits: Arc<AtomicUsize>,
    api_versions: Arc<Mutex<Vec<String>>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct MockState {
    content: &'static str,
    hits: Arc<AtomicUsize>,
    api_versions: Arc<Mutex<Vec<String>>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

#[derive(Deserialize)]
struct ApiVersion {
    #[serde(rename = "api-version")]
    api_version: String,
}

async fn chat_completions(
    State(mock): State<MockState>,
    Query(query): Query<ApiVersion>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> Json<Value> {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    mock.api_versions.lock().unwrap().push(query.api_version);
    if let Some(key) = headers.get("api-key").and_then(|v| v.to_str().ok()) {
        mock.api_keys.lock().unwrap().push(key.to_string());
    }

    Json(json!({
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": mock.content}}
        ]
    }))
}

impl MockAzure {
    pub async fn spawn(content: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let api_versions = Arc::new(Mutex::new(Vec::new()));
        let api_keys = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(
                "/openai/deployments/{deployment}/chat/completions",
                post(chat_completions),
            )
            .with_state(MockState {
                content,
                hits: hits.clone(),
                api_versions: api_versions.clone(),
                api_keys: api_keys.clone(),
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            hits,
            api_versions,
            api_keys,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn api_versions(&self) -> Vec<String> {
        self.api_versions.lock().unwrap().clone()
    }

    pub fn api_keys(&self) -> Vec<String> {
        self.api_keys.lock().unwrap().clone()
    }
}

pub async fn test_server(flags: &[&str]) -> TestServer {
    let mut argv = vec!["gutflix-api"];
    argv.extend_from_slice(flags);
    let args = Arc::new(Args::parse_from(argv));

    let state = state(args).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

/// Memory store, LLM pointed at the given mock.
pub async fn server_with_llm(mock: &MockAzure) -> TestServer {
    test_server(&[
        "--store-backend",
        "memory",
        "--azure-openai-endpoint",
        &mock.url,
        "--azure-openai-api-key",
        "test-key",
        "--llm-timeout-secs",
        "5",
    ])
    .await
}

/// Memory store, no LLM credentials.
pub async fn server_without_llm() -> TestServer {
    test_server(&[
        "--store-backend",
        "memory",
        "--azure-openai-endpoint=",
        "--azure-openai-api-key=",
    ])
    .await
}

/// Supabase store pointed at a closed port, simulating an outage.
pub async fn server_with_store_outage(env: &str) -> TestServer {
    test_server(&[
        "--env",
        env,
        "--store-backend",
        "supabase",
        "--supabase-url",
        "http://127.0.0.1:9",
        "--supabase-anon-key",
        "anon",
        "--azure-openai-endpoint=",
        "--azure-openai-api-key=",
    ])
    .await
}

/// Supabase store on a closed port, LLM pointed at the given mock.
pub async fn server_with_llm_and_store_outage(mock: &MockAzure) -> TestServer {
    test_server(&[
        "--store-backend",
        "supabase",
        "--supabase-url",
        "http://127.0.0.1:9",
        "--supabase-anon-key",
        "anon",
        "--azure-openai-endpoint",
        &mock.url,
        "--azure-openai-api-key",
        "test-key",
        "--llm-timeout-secs",
        "5",
    ])
    .await
}
