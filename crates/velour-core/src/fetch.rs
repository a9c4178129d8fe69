//! Fetch state for route-driven requests.
//!
//! Every request is issued through [`FetchTracker::begin`], which hands out a
//! ticket tagged with a generation number. Completing with a ticket from an
//! older generation is a no-op, so when the route parameter changes quickly
//! the last request issued wins no matter which response lands last.

use crate::ModelName;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    name: ModelName,
}

impl FetchTicket {
    pub fn name(&self) -> &ModelName {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct FetchTracker<T> {
    generation: u64,
    active: Option<ModelName>,
    state: FetchState<T>,
}

impl<T> Default for FetchTracker<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            active: None,
            state: FetchState::Idle,
        }
    }
}

impl<T> FetchTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn active(&self) -> Option<&ModelName> {
        self.active.as_ref()
    }

    /// Start a request for `name`. Any request still in flight becomes stale.
    pub fn begin(&mut self, name: ModelName) -> FetchTicket {
        self.generation += 1;
        self.active = Some(name.clone());
        self.state = FetchState::Loading;
        debug!(model = %name, generation = self.generation, "fetch issued");
        FetchTicket {
            generation: self.generation,
            name,
        }
    }

    /// Start a request only when `name` differs from the active identifier.
    pub fn begin_if_changed(&mut self, name: ModelName) -> Option<FetchTicket> {
        if self.active.as_ref() == Some(&name) {
            return None;
        }
        Some(self.begin(name))
    }

    /// React to the route's `name` parameter: a malformed name fails the
    /// fetch, a new valid name issues exactly one request, and an unchanged
    /// one issues none.
    pub fn on_route_name(&mut self, raw: &str) -> Option<FetchTicket> {
        match ModelName::parse(raw) {
            Ok(name) => self.begin_if_changed(name),
            Err(e) => {
                self.reject(e.to_string());
                None
            }
        }
    }

    /// Fail without issuing a request, e.g. for a malformed route parameter.
    /// In-flight requests are invalidated.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.generation += 1;
        self.active = None;
        self.state = FetchState::Failed(reason.into());
    }

    /// Apply a finished request. Returns false when the ticket is stale and
    /// the result was dropped.
    pub fn complete<E: ToString>(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<T, E>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                model = %ticket.name,
                generation = ticket.generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return false;
        }

        self.state = match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }
}
