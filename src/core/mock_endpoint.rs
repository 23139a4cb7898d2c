//! Local stand-in for the translation endpoint, used by tests

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the mock answers
enum Reply {
    /// Same status and body for every request
    Fixed { status: StatusCode, body: String },
    /// 200 with the uppercased `q` parameter as translation, detected as `en`
    Echo,
    /// Like `Echo`, answering only after the delay
    SlowEcho(Duration),
}

struct MockState {
    reply: Reply,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

/// Running mock endpoint bound to an ephemeral local port
#[derive(Clone)]
pub struct MockEndpoint {
    pub url: String,
    state: Arc<MockState>,
}

impl MockEndpoint {
    pub async fn fixed(status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        Self::start(Reply::Fixed {
            status,
            body: body.to_string(),
        })
        .await
    }

    pub async fn echo() -> Self {
        Self::start(Reply::Echo).await
    }

    pub async fn slow_echo(delay: Duration) -> Self {
        Self::start(Reply::SlowEcho(delay)).await
    }

    /// Query strings received so far
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().expect("queries lock").clone()
    }

    async fn start(reply: Reply) -> Self {
        let state = Arc::new(MockState {
            reply,
            queries: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/translate_a/single", get(single))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock endpoint");
        let addr = listener.local_addr().expect("mock address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url: format!("http://{}/translate_a/single", addr),
            state,
        }
    }
}

async fn single(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let text = query.get("q").cloned().unwrap_or_default();
    state.queries.lock().expect("queries lock").push(query);

    match &state.reply {
        Reply::Fixed { status, body } => (*status, body.clone()),
        Reply::Echo => (StatusCode::OK, echo_body(text)),
        Reply::SlowEcho(delay) => {
            tokio::time::sleep(*delay).await;
            (StatusCode::OK, echo_body(text))
        }
    }
}

fn echo_body(text: String) -> String {
    serde_json::json!([[[text.to_uppercase(), text, null, null, 1]], null, "en"]).to_string()
}
