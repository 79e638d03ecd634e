//! Focus session endpoints

use serde::{Deserialize, Serialize};

use fguard_core::prelude::*;
use fguard_core::{FocusMode, FocusStatus};

use crate::client::ApiClient;

/// `POST /focus/start` request body.
#[derive(Debug, Serialize)]
struct StartBody<'a> {
    duration: u32,
    mode: &'a str,
}

/// `POST /focus/stop` request body.
#[derive(Debug, Serialize)]
struct StopBody {
    completed: bool,
}

/// Fields of the start response the client may care about. The views only
/// need success/failure; the session id is kept for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedSession {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// Fields of the stop response. `completed_minutes` is what the server
/// credits toward analytics.
#[derive(Debug, Clone, Deserialize)]
pub struct StoppedSession {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_minutes: f64,
}

/// Focus session namespace of the API client.
pub struct FocusApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FocusApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /focus/start` - begin a server-tracked session.
    pub async fn start(&self, duration_minutes: u32, mode: &FocusMode) -> Result<StartedSession> {
        let body = StartBody {
            duration: duration_minutes,
            mode: mode.as_str(),
        };
        self.client.post_json("focus/start", &body).await
    }

    /// `POST /focus/stop` - end the active session.
    ///
    /// `completed` distinguishes natural expiry (true) from a manual stop
    /// (false); the server uses it for completion-rate analytics.
    pub async fn stop(&self, completed: bool) -> Result<StoppedSession> {
        self.client
            .post_json("focus/stop", &StopBody { completed })
            .await
    }

    /// `GET /focus/status` - the authoritative countdown snapshot.
    pub async fn status(&self) -> Result<FocusStatus> {
        self.client.get_json("focus/status").await
    }
}
