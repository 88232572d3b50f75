//! The live workflow state: step machine, record, submission status

use super::fields::FieldId;
use super::record::ApplicationRecord;
use super::validate;
use crate::collector::traits::{DispatchOutcome, OutcomePresenter, SubmitLead};
use crate::config::Deployment;
use crate::qualify;

/// Shown when the collector dispatch itself fails; the record is kept so
/// the prospect can resubmit.
const RETRY_MESSAGE: &str =
    "We couldn't send your application. Please try again, or reach out to us on WhatsApp.";

/// The three form steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Identity,
    CompanyProfile,
    ChallengeAndUrgency,
}

impl Step {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::CompanyProfile),
            Self::CompanyProfile => Some(Self::ChallengeAndUrgency),
            Self::ChallengeAndUrgency => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::CompanyProfile => Some(Self::Identity),
            Self::ChallengeAndUrgency => Some(Self::CompanyProfile),
        }
    }

    /// 1-based step number for the progress header
    pub fn number(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::CompanyProfile => 2,
            Self::ChallengeAndUrgency => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Identity => "Your details",
            Self::CompanyProfile => "About the company",
            Self::ChallengeAndUrgency => "Challenge & urgency",
        }
    }
}

/// Where the submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// One prospect's in-memory workflow state. Nothing here outlives the
/// page visit: no persistence, no resume after restart.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub current_step: Step,
    pub record: ApplicationRecord,
    pub submission_status: SubmissionStatus,
    pub error_text: Option<String>,
    deployment: Deployment,
}

impl FormSession {
    pub fn new(deployment: Deployment) -> Self {
        Self {
            current_step: Step::default(),
            record: ApplicationRecord::default(),
            submission_status: SubmissionStatus::default(),
            error_text: None,
            deployment,
        }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Overwrite one record field. Ignored once a submission is in flight
    /// or has succeeded; the record is frozen from that point on.
    pub fn edit_field(&mut self, field: FieldId, value: String) {
        if matches!(
            self.submission_status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        ) {
            return;
        }
        self.record.set(field, value);
        self.error_text = None;
    }

    /// Advance to the next step if the current one is complete. Returns
    /// whether the step changed.
    pub fn go_next(&mut self) -> bool {
        let Some(next) = self.current_step.next() else {
            // The final step is left through submit, never through go_next.
            return false;
        };
        let missing = validate::missing_fields(self.current_step, &self.record);
        if !missing.is_empty() {
            self.error_text = Some(validate::missing_fields_message(&missing));
            return false;
        }
        self.error_text = None;
        self.current_step = next;
        true
    }

    /// Move to the previous step without validating. Returns whether the
    /// step changed.
    pub fn go_back(&mut self) -> bool {
        let Some(prev) = self.current_step.prev() else {
            return false;
        };
        self.error_text = None;
        self.current_step = prev;
        true
    }

    /// Run the submission: revalidate the final step, dispatch through the
    /// pipeline, then branch on qualification via the presenter.
    ///
    /// Legal only from the final step while no submission is in flight; a
    /// failed attempt leaves the record untouched for resubmission.
    pub async fn submit(
        &mut self,
        pipeline: &dyn SubmitLead,
        presenter: &mut dyn OutcomePresenter,
    ) {
        if self.current_step != Step::ChallengeAndUrgency {
            return;
        }
        if matches!(
            self.submission_status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        ) {
            return;
        }

        let missing = validate::missing_fields(self.current_step, &self.record);
        if !missing.is_empty() {
            self.error_text = Some(validate::missing_fields_message(&missing));
            return;
        }

        self.error_text = None;
        self.submission_status = SubmissionStatus::Submitting;

        match pipeline.submit(&self.record).await {
            DispatchOutcome::Dispatched => {
                self.submission_status = SubmissionStatus::Succeeded;
                if qualify::is_qualified(&self.record.revenue, &self.record.employees) {
                    presenter.redirect_to_scheduling(&self.deployment.scheduling_url);
                } else {
                    presenter.show_acknowledgement();
                }
            }
            DispatchOutcome::TransportFailed => {
                self.submission_status = SubmissionStatus::Failed;
                self.error_text = Some(RETRY_MESSAGE.to_string());
            }
        }
    }

    /// Discard everything and return to the initial empty session
    pub fn reset(&mut self) {
        self.current_step = Step::default();
        self.record = ApplicationRecord::default();
        self.submission_status = SubmissionStatus::default();
        self.error_text = None;
    }
}
