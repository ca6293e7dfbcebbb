//! Search form state and the submit/complete cycle around one provider call.
//!
//! A submit either fails locally (blank input) or yields a [`PendingSearch`].
//! The pending search runs against a [`WeatherProvider`] and produces a
//! [`Completion`], which the owner feeds back through
//! [`SearchFormController::complete`] in whatever order completions arrive.
//! [`SearchFormController::search`] chains the three steps for hosts that
//! never overlap requests.

use tracing::debug;

use crate::{QueryError, WeatherProvider, WeatherRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Either a full record or a full error, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Weather(WeatherRecord),
    Error(QueryError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub input_text: String,
    pub status: Status,
    pub result: Option<SearchResult>,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn weather(&self) -> Option<&WeatherRecord> {
        match &self.result {
            Some(SearchResult::Weather(record)) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match &self.result {
            Some(SearchResult::Error(err)) => Some(err),
            _ => None,
        }
    }
}

/// Identity of one non-blank submission; later submissions get larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What to do with a completion that belongs to an older submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Apply every completion; whichever resolves last is shown.
    #[default]
    LastResolvedWins,
    /// Drop completions for anything but the most recently issued request.
    LatestIssuedWins,
}

/// A validated submission waiting to be sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    id: RequestId,
    location: String,
}

impl PendingSearch {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// The trimmed location text.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Issue the provider call. Exactly one `query` per pending search.
    pub async fn run<P>(self, provider: &P) -> Completion
    where
        P: WeatherProvider + ?Sized,
    {
        let outcome = provider.query(&self.location).await;
        Completion { id: self.id, outcome }
    }
}

/// Outcome of one [`PendingSearch`]; only [`PendingSearch::run`] creates these.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    id: RequestId,
    outcome: Result<WeatherRecord, QueryError>,
}

impl Completion {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn outcome(&self) -> &Result<WeatherRecord, QueryError> {
        &self.outcome
    }
}

#[derive(Debug, Default)]
pub struct SearchFormController {
    state: SearchState,
    policy: StaleResponsePolicy,
    next_id: u64,
}

impl SearchFormController {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Validate the current input and start a request.
    ///
    /// Blank input stores [`QueryError::EmptyInput`], drops any shown record
    /// and returns `None`; no provider call must follow. While a request is
    /// in flight blank input is ignored, so only a completion leaves
    /// `Loading`. Otherwise the state enters `Loading` with the previous
    /// result cleared.
    pub fn submit(&mut self) -> Option<PendingSearch> {
        let location = self.state.input_text.trim();

        if location.is_empty() {
            if self.state.is_loading() {
                return None;
            }
            self.state.status = Status::Failure;
            self.state.result = Some(SearchResult::Error(QueryError::EmptyInput));
            return None;
        }

        let location = location.to_string();
        self.next_id += 1;
        let id = RequestId(self.next_id);

        self.state.status = Status::Loading;
        self.state.result = None;
        debug!(request = id.0, location = %location, "search submitted");

        Some(PendingSearch { id, location })
    }

    /// Apply a finished request. Returns `false` if the policy discarded it.
    ///
    /// An applied completion always leaves `Loading`, whatever its outcome.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let latest = RequestId(self.next_id);

        if self.policy == StaleResponsePolicy::LatestIssuedWins && completion.id < latest {
            debug!(request = completion.id.0, latest = latest.0, "discarding stale response");
            return false;
        }

        match completion.outcome {
            Ok(record) => {
                self.state.status = Status::Success;
                self.state.result = Some(SearchResult::Weather(record));
            }
            Err(err) => {
                debug!(request = completion.id.0, kind = ?err.kind(), "search failed");
                self.state.status = Status::Failure;
                self.state.result = Some(SearchResult::Error(err));
            }
        }

        true
    }

    /// Submit, query and apply in one go.
    pub async fn search<P>(&mut self, provider: &P) -> &SearchState
    where
        P: WeatherProvider + ?Sized,
    {
        if let Some(pending) = self.submit() {
            let completion = pending.run(provider).await;
            self.complete(completion);
        }
        &self.state
    }
}
