//! The submission pipeline: serialize, dispatch, then best-effort tracking

use async_trait::async_trait;

use super::traits::{DispatchOutcome, LeadCollector, SubmitLead, TrackingEmitter};
use crate::state::ApplicationRecord;

/// Drives one submission end to end.
///
/// The collector dispatch decides the outcome; the tracking emission is
/// optional and its result is never allowed to influence the workflow.
pub struct SubmissionPipeline {
    collector: Box<dyn LeadCollector>,
    tracker: Option<Box<dyn TrackingEmitter>>,
    tracking_event: String,
}

impl SubmissionPipeline {
    pub fn new(
        collector: Box<dyn LeadCollector>,
        tracker: Option<Box<dyn TrackingEmitter>>,
        tracking_event: impl Into<String>,
    ) -> Self {
        Self {
            collector,
            tracker,
            tracking_event: tracking_event.into(),
        }
    }

    fn emit_tracking(&self) {
        let Some(tracker) = &self.tracker else {
            return;
        };
        if let Err(err) = tracker.emit(&self.tracking_event) {
            tracing::debug!(error = %err, "tracking emission failed, ignoring");
        }
    }
}

#[async_trait]
impl SubmitLead for SubmissionPipeline {
    async fn submit(&self, record: &ApplicationRecord) -> DispatchOutcome {
        let payload = match serde_json::to_value(record) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "application record could not be encoded");
                return DispatchOutcome::TransportFailed;
            }
        };

        if let Err(err) = self.collector.dispatch(payload).await {
            tracing::warn!(error = %err, "lead dispatch failed");
            return DispatchOutcome::TransportFailed;
        }

        self.emit_tracking();
        DispatchOutcome::Dispatched
    }
}

/// Default tracking capability for the terminal host: records the
/// conversion event in the log stream
pub struct TracingTracker;

impl TrackingEmitter for TracingTracker {
    fn emit(&self, event: &str) -> anyhow::Result<()> {
        tracing::info!(event, "conversion event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::{MockLeadCollector, MockTrackingEmitter};
    use crate::collector::CollectorError;
    use crate::state::FieldId;
    use anyhow::anyhow;

    fn record() -> ApplicationRecord {
        let mut record = ApplicationRecord::default();
        record.set(FieldId::Name, "Jane Smith".to_string());
        record.set(FieldId::Revenue, "R$ 100k to R$ 300k".to_string());
        record
    }

    fn transport_error() -> CollectorError {
        let source = reqwest::Client::new()
            .post("http://[invalid")
            .build()
            .unwrap_err();
        CollectorError::Transport(source)
    }

    #[test]
    fn test_dispatch_success_without_tracker_is_dispatched() {
        // Tracking capability absent: submission still completes normally.
        let mut collector = MockLeadCollector::new();
        collector.expect_dispatch().times(1).returning(|_| Ok(()));
        let pipeline = SubmissionPipeline::new(Box::new(collector), None, "Lead");

        let outcome = tokio_test::block_on(pipeline.submit(&record()));
        assert_eq!(outcome, DispatchOutcome::Dispatched);
    }

    #[test]
    fn test_transport_failure_yields_transport_failed_and_skips_tracking() {
        let mut collector = MockLeadCollector::new();
        collector
            .expect_dispatch()
            .times(1)
            .returning(|_| Err(transport_error()));
        let mut tracker = MockTrackingEmitter::new();
        tracker.expect_emit().never();
        let pipeline = SubmissionPipeline::new(Box::new(collector), Some(Box::new(tracker)), "Lead");

        let outcome = tokio_test::block_on(pipeline.submit(&record()));
        assert_eq!(outcome, DispatchOutcome::TransportFailed);
    }

    #[test]
    fn test_tracker_failure_is_absorbed() {
        let mut collector = MockLeadCollector::new();
        collector.expect_dispatch().returning(|_| Ok(()));
        let mut tracker = MockTrackingEmitter::new();
        tracker
            .expect_emit()
            .times(1)
            .returning(|_| Err(anyhow!("pixel unreachable")));
        let pipeline = SubmissionPipeline::new(Box::new(collector), Some(Box::new(tracker)), "Lead");

        let outcome = tokio_test::block_on(pipeline.submit(&record()));
        assert_eq!(outcome, DispatchOutcome::Dispatched);
    }

    #[test]
    fn test_tracker_receives_configured_event_name() {
        let mut collector = MockLeadCollector::new();
        collector.expect_dispatch().returning(|_| Ok(()));
        let mut tracker = MockTrackingEmitter::new();
        tracker
            .expect_emit()
            .withf(|event| event == "Lead")
            .times(1)
            .returning(|_| Ok(()));
        let pipeline = SubmissionPipeline::new(Box::new(collector), Some(Box::new(tracker)), "Lead");

        tokio_test::block_on(pipeline.submit(&record()));
    }

    #[test]
    fn test_collector_receives_flat_payload() {
        let mut collector = MockLeadCollector::new();
        collector
            .expect_dispatch()
            .withf(|payload| {
                payload["name"] == "Jane Smith" && payload["revenue"] == "R$ 100k to R$ 300k"
            })
            .times(1)
            .returning(|_| Ok(()));
        let pipeline = SubmissionPipeline::new(Box::new(collector), None, "Lead");

        tokio_test::block_on(pipeline.submit(&record()));
    }
}
