//! API request and response types

use serde::{Deserialize, Serialize};

pub use trivia_core::{RevealStep, SessionView, Status};

/// Body of POST /api/session/load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadDateRequest {
    pub date: String,
}

/// Current viewer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

impl SessionResponse {
    pub fn active(view: SessionView) -> Self {
        Self {
            status: Status::Active,
            session: Some(view),
        }
    }

    pub fn no_session() -> Self {
        Self {
            status: Status::NoSession,
            session: None,
        }
    }
}

/// Response of POST /api/session/reveal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealResponse {
    pub step: RevealStep,
    pub session: SessionView,
}

/// Response of the card navigation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    /// False when already at the first/last card.
    pub moved: bool,
    pub session: SessionView,
}
