mod assignments;
mod clubs;
mod error;
mod fixtures;
mod referees;
mod routes;
mod session;
mod settings;

#[cfg(test)]
mod testing;

pub use error::{ApiError, ApiResult};
pub use settings::Settings;

use crate::routes::ServerRoutes;
use assistant::{BriefWriter, Recommender};
use axum::Router;
use axum::response::IntoResponse;
use domain::{Action, ActionError, AppState};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct RefConnectServer {
    data: AppData,
}

impl RefConnectServer {
    pub fn new(data: AppData) -> Self {
        RefConnectServer { data }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let port = self.data.settings.port;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", port);

        if let Err(e) = axum::serve(listener, app(self.data.clone())).await {
            error!("Server error: {}", e);
        }

        Ok(())
    }
}

pub fn app(data: AppData) -> Router {
    ServerRoutes::create()
        .layer(
            ServiceBuilder::new()
                // Catch panics in handlers and convert them to 500 errors
                .layer(CatchPanicLayer::custom(|_err| {
                    ApiError::InternalError("handler panicked".to_string()).into_response()
                })),
        )
        .with_state(data)
}

#[derive(Clone)]
pub struct AppData {
    pub state: Arc<RwLock<AppState>>,
    pub recommender: Arc<Recommender>,
    pub briefs: Arc<BriefWriter>,
    pub settings: Arc<Settings>,
}

impl AppData {
    pub fn new(
        state: AppState,
        recommender: Recommender,
        briefs: BriefWriter,
        settings: Settings,
    ) -> Self {
        AppData {
            state: Arc::new(RwLock::new(state)),
            recommender: Arc::new(recommender),
            briefs: Arc::new(briefs),
            settings: Arc::new(settings),
        }
    }

    /// Applies `action` under the write lock and returns what `view` reads
    /// from the resulting state. A rejected action leaves the state as it was.
    pub async fn update<T>(
        &self,
        action: Action,
        view: impl FnOnce(&AppState) -> T,
    ) -> Result<T, ActionError> {
        let mut state = self.state.write().await;

        let next = state.apply(action)?;
        let result = view(&next);
        *state = next;

        Ok(result)
    }
}
