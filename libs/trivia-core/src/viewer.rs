//! The viewer state machine: `NoSession` until a date loads, then `Active`.

use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::error::{FetchError, LoadError};
use crate::parser::parse;
use crate::session::{RevealStep, Session};
use crate::source::CardSource;

/// What happens to the current session when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Drop to `NoSession`.
    #[default]
    Reset,
    /// Leave the prior session in place.
    KeepPrevious,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::KeepPrevious => "keep_previous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reset" => Some(Self::Reset),
            "keep_previous" => Some(Self::KeepPrevious),
            _ => None,
        }
    }
}

/// Viewer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NoSession,
    Active,
}

/// Handle for an in-flight load. Only the most recently issued ticket can
/// commit.
#[derive(Debug)]
#[must_use = "a ticket must be passed to finish_load"]
pub struct LoadTicket {
    generation: u64,
    date: DateKey,
}

impl LoadTicket {
    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns at most one session and applies commands to it.
#[derive(Debug, Default)]
pub struct Viewer {
    session: Option<Session>,
    generation: u64,
    policy: FailurePolicy,
}

impl Viewer {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            session: None,
            generation: 0,
            policy,
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn status(&self) -> Status {
        match self.session {
            Some(_) => Status::Active,
            None => Status::NoSession,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Fetch, parse and install `date` as the active session.
    pub async fn load_date<S: CardSource>(
        &mut self,
        source: &S,
        date: &str,
    ) -> Result<&Session, LoadError> {
        let ticket = self.begin_load(date);
        let fetched = source.fetch(ticket.date()).await;
        self.finish_load(ticket, fetched)
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self, date: &str) -> LoadTicket {
        self.generation += 1;
        let date = DateKey::parse(date);
        if !date.is_calendar_date() {
            tracing::warn!("Loading malformed date {:?} from {}", date.raw(), date.data_path());
        }
        tracing::info!(generation = self.generation, "Loading cards from {}", date.data_path());
        LoadTicket {
            generation: self.generation,
            date,
        }
    }

    /// Commit the result of a fetch started with `begin_load`.
    ///
    /// A stale ticket leaves the state untouched and yields
    /// `LoadError::Superseded`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        fetched: Result<String, FetchError>,
    ) -> Result<&Session, LoadError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded load of {}",
                ticket.date
            );
            return Err(LoadError::Superseded {
                date: ticket.date.to_string(),
            });
        }

        match fetched.map_err(LoadError::from).and_then(|text| {
            parse(&text).map_err(LoadError::from)
        }) {
            Ok(cards) => {
                tracing::info!("Loaded {} cards for {}", cards.len(), ticket.date);
                Ok(&*self.session.insert(Session::new(ticket.date, cards)))
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", ticket.date, e);
                if self.policy == FailurePolicy::Reset {
                    self.session = None;
                }
                Err(e)
            }
        }
    }

    /// No-op without a session.
    pub fn reveal_next(&mut self) -> Option<RevealStep> {
        self.session.as_mut().map(Session::reveal_next)
    }

    pub fn go_to_next_card(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(Session::go_to_next_card)
    }

    pub fn go_to_previous_card(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(Session::go_to_previous_card)
    }
}
