use crate::{AppData, Settings, app};
use assistant::{AssistantError, BriefWriter, CompletionClient, RankingBackend, Recommender};
use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use domain::{AppState, Roster};
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use tower::ServiceExt;

/// Answers every prompt with the same reply.
pub struct ScriptedClient {
    reply: Result<String, AssistantError>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(ScriptedClient {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(ScriptedClient {
            reply: Err(AssistantError::Transport("connection refused".to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionClient for ScriptedClient {
    fn complete<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, AssistantError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(self.reply.clone()).boxed()
    }
}

/// Holds every call until [`GatedClient::open`], then replies.
pub struct GatedClient {
    gate: Semaphore,
    reply: String,
}

impl GatedClient {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(GatedClient {
            gate: Semaphore::new(0),
            reply: reply.to_string(),
        })
    }

    pub fn open(&self) {
        self.gate.add_permits(1);
    }
}

impl CompletionClient for GatedClient {
    fn complete<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, AssistantError>> {
        async move {
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| AssistantError::Transport(e.to_string()))?;

            Ok(self.reply.clone())
        }
        .boxed()
    }
}

/// Bitterne Park United plus four referees; r3 only does Saturdays.
pub fn southampton_state() -> AppState {
    let roster: Roster = serde_json::from_value(json!({
        "clubs": [
            {
                "id": "c1",
                "name": "Bitterne Park United",
                "league": "Tyro League",
                "location": "Bitterne",
                "logoUrl": "https://ui-avatars.com/api/?name=Bitterne+Park+United"
            },
            {
                "id": "c2",
                "name": "Sholing FC",
                "league": "Wessex League",
                "location": "Sholing",
                "logoUrl": "https://ui-avatars.com/api/?name=Sholing+FC"
            }
        ],
        "referees": [
            {
                "id": "r1",
                "name": "John Whistle",
                "badgeLevel": "Level 7 (Junior)",
                "location": "Bitterne",
                "experienceYears": 5,
                "availableDays": ["Saturday", "Sunday"],
                "avatarUrl": "https://i.pravatar.cc/150?u=r1"
            },
            {
                "id": "r2",
                "name": "Sarah Flags",
                "badgeLevel": "Level 7 (Junior)",
                "location": "Totton",
                "experienceYears": 2,
                "availableDays": ["Sunday"],
                "avatarUrl": "https://i.pravatar.cc/150?u=r2",
                "isMinor": true,
                "parentContact": "parent@example.com"
            },
            {
                "id": "r3",
                "name": "Mike Card",
                "badgeLevel": "Level 5 (Senior)",
                "location": "Shirley",
                "experienceYears": 10,
                "availableDays": ["Saturday"],
                "avatarUrl": "https://i.pravatar.cc/150?u=r3"
            },
            {
                "id": "r4",
                "name": "Emma Offside",
                "badgeLevel": "Level 4",
                "location": "Portswood",
                "experienceYears": 12,
                "availableDays": ["Saturday", "Sunday"],
                "avatarUrl": "https://i.pravatar.cc/150?u=r4"
            }
        ]
    }))
    .unwrap();

    AppState::from_roster(roster).unwrap()
}

pub fn test_app(client: Option<Arc<dyn CompletionClient>>, ranking: RankingBackend) -> Router {
    let settings = Settings {
        ranking,
        ..Settings::default()
    };

    app(AppData::new(
        southampton_state(),
        Recommender::new(client.clone(), ranking),
        BriefWriter::new(client),
        settings,
    ))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |body| Body::from(body.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Sends a request and gives up on it after 100 ms, as a client that hangs up would.
pub async fn abandon(app: &Router, method: Method, uri: &str) {
    let sent = tokio::time::timeout(Duration::from_millis(100), send(app, method.clone(), uri, None)).await;

    assert!(sent.is_err(), "{} {} finished before it was abandoned", method, uri);
}

/// Polls `uri` until `done` holds for the response body.
pub async fn wait_for(app: &Router, uri: &str, done: impl Fn(&Value) -> bool) -> Value {
    for _ in 0..100 {
        let (_, body) = send(app, Method::GET, uri, None).await;
        if done(&body) {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("{} never settled", uri);
}
