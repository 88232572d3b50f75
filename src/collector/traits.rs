//! Trait abstractions for the submission collaborators, enabling mocking
//! in tests

use crate::state::ApplicationRecord;
use async_trait::async_trait;
use serde_json::Value;

use super::client::CollectorError;

/// Result of a submission attempt as far as the workflow can observe it.
///
/// The collector endpoint never yields a readable response, so there is
/// no success/rejection distinction beyond "the request left this machine".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched,
    TransportFailed,
}

/// Outbound transport to the remote collector
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadCollector: Send + Sync {
    /// Send the serialized record. Only a transport-level failure is an
    /// error; the response itself is opaque and never inspected.
    async fn dispatch(&self, payload: Value) -> Result<(), CollectorError>;
}

/// Optional conversion-event sink. Fire-and-forget: the pipeline absorbs
/// every failure.
#[cfg_attr(test, mockall::automock)]
pub trait TrackingEmitter: Send + Sync {
    fn emit(&self, event: &str) -> anyhow::Result<()>;
}

/// The full submission pipeline as the state machine sees it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitLead: Send + Sync {
    async fn submit(&self, record: &ApplicationRecord) -> DispatchOutcome;
}

/// Realizes the two terminal outcomes of the workflow
#[cfg_attr(test, mockall::automock)]
pub trait OutcomePresenter: Send {
    /// Full navigation away to the scheduling page; nothing of the
    /// workflow is observable afterwards
    fn redirect_to_scheduling(&mut self, url: &str);

    /// Persistent confirmation view with the manual-contact escalation
    fn show_acknowledgement(&mut self);
}
