//! URN API integration tests.
//!
//! Starts the router on an ephemeral port and drives every endpoint over
//! HTTP, the way the browser front-end and scripts use it.

use devurn_api::{api, config::Config, state::AppState};
use devurn_urn::{DetectPolicy, HexTieBreak, PenPairTieBreak};
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct ApiFixture {
    base_url: String,
    client: reqwest::Client,
}

impl ApiFixture {
    async fn start(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,devurn_api=debug".into()),
            )
            .with_test_writer()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no address");

        let app = api::create_router(AppState::new(&config));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        (status, response.json().await.unwrap_or(Value::Null))
    }
}

async fn start_default() -> ApiFixture {
    ApiFixture::start(Config::default()).await
}

#[tokio::test]
async fn test_index_and_health() {
    let api = start_default().await;

    let (status, body) = api.get("/api").await;
    assert_eq!(status, 200);
    assert_eq!(body["rfc"], "RFC 9039");
    assert_eq!(body["namespace"], "urn:dev");
    assert!(body["endpoints"]["/api/generate"].is_object());

    let (status, body) = api.get("/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_subtypes() {
    let api = start_default().await;
    let (status, body) = api.get("/api/subtypes").await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 5);

    let keys: Vec<&str> = body["subtypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["subtype"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["mac", "ow", "org", "os", "ops"]);
    assert_eq!(body["subtypes"][4]["format"], "PEN:product:serial");
}

#[tokio::test]
async fn test_detect() {
    let api = start_default().await;

    let (status, body) = api
        .post("/api/detect", json!({ "input": "00:1B:44:11:3A:B7" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["detectedSubtype"], "mac");
    assert_eq!(body["subtypeInfo"]["name"], "MAC/EUI Address");
    assert_eq!(body["success"], true);

    let (_, body) = api
        .post("/api/detect", json!({ "input": "32473:switch:12345" }))
        .await;
    assert_eq!(body["detectedSubtype"], "ops");

    let (status, body) = api.post("/api/detect", json!({ "input": "???" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["detectedSubtype"], Value::Null);
    assert_eq!(body["subtypeInfo"], Value::Null);
    assert_eq!(body["success"], false);

    let (status, body) = api.post("/api/detect", json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "missing_field");
}

#[tokio::test]
async fn test_detect_uses_configured_policy() {
    let api = ApiFixture::start(Config {
        detect_policy: DetectPolicy {
            bare_hex16: HexTieBreak::Ow,
            pen_pair: PenPairTieBreak::Os,
        },
        ..Config::default()
    })
    .await;

    let (_, body) = api
        .post("/api/detect", json!({ "input": "10E2073A01080063" }))
        .await;
    assert_eq!(body["detectedSubtype"], "ow");

    let (_, body) = api
        .post("/api/detect", json!({ "input": "32473:12345" }))
        .await;
    assert_eq!(body["detectedSubtype"], "os");

    let (_, body) = api.get("/api/detect").await;
    assert_eq!(body["examples"][2]["expectedSubtype"], "ow");
}

#[tokio::test]
async fn test_validate() {
    let api = start_default().await;

    let (status, body) = api
        .post(
            "/api/validate",
            json!({ "subtype": "mac", "input": "00:1B:44:11:3A:B7" }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], true);
    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["example"], "00:1B:44:11:3A:B7");

    // Invalid input is still a 200 with the reason.
    let (status, body) = api
        .post("/api/validate", json!({ "subtype": "org", "input": "032473:foo" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["valid"], false);
    assert_eq!(body["code"], "invalid_pen");
    assert_eq!(
        body["error"],
        "PEN must be a positive integer without leading zeros"
    );

    let (status, body) = api
        .post("/api/validate", json!({ "subtype": "mac", "input": "" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["code"], "empty_input");

    let (status, body) = api
        .post("/api/validate", json!({ "subtype": "eui", "input": "x" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "unknown_subtype");
    assert_eq!(body["error"], "Invalid subtype: eui");

    let (status, _) = api.post("/api/validate", json!({ "input": "x" })).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_generate() {
    let api = start_default().await;

    let (status, body) = api
        .post(
            "/api/generate",
            json!({ "subtype": "mac", "input": " 00:1B:44:11:3A:B7 " }),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["urn"], "urn:dev:mac:021b44fffe113ab7");
    assert_eq!(body["subtype"], "mac");
    assert_eq!(body["input"], "00:1B:44:11:3A:B7");
    assert_eq!(body["valid"], true);
    assert_eq!(body["breakdown"]["identifier"], "021b44fffe113ab7");

    let (status, body) = api
        .post("/api/generate", json!({ "subtype": "ow", "input": "1000008F12AA" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "invalid_length");

    let (status, body) = api
        .post("/api/generate", json!({ "subtype": "mac", "input": "" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "missing_field");
}

#[tokio::test]
async fn test_breakdown() {
    let api = start_default().await;

    let (status, body) = api
        .post("/api/breakdown", json!({ "urn": "urn:dev:org:32473:a:b" }))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["subtype"], "org");
    assert_eq!(body["identifier"], "32473:a:b");
    assert_eq!(body["description"], "Organization-specific identifier using PEN");

    let (status, body) = api
        .post("/api/breakdown", json!({ "urn": "notaurn:dev:mac:xyz" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "malformed_urn");

    let (status, body) = api
        .post("/api/breakdown", json!({ "urn": "urn:dev:uuid:1" }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "unknown_subtype");
}

#[tokio::test]
async fn test_malformed_json_is_problem() {
    let api = start_default().await;
    let response = api
        .client
        .post(format!("{}/api/generate", api.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers()["content-type"],
        "application/problem+json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid_json");
}
