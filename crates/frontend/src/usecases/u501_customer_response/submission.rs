use contracts::usecases::u501_customer_response::CustomerResponseAction;

use super::api::failure_alert;
use crate::shared::api_utils::ApiError;

/// What the dialog does once the server answered
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Saved: hand the action to the page, which closes the dialog
    Close(CustomerResponseAction),
    /// Failed: alert and keep the dialog open with its notes
    StayOpen { alert: String },
}

/// In-flight state of the accept/reject dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub in_flight: Option<CustomerResponseAction>,
}

impl Submission {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns false when a request is already running
    pub fn begin(&mut self, action: CustomerResponseAction) -> bool {
        if self.is_busy() {
            return false;
        }
        self.in_flight = Some(action);
        true
    }

    pub fn finish(
        &mut self,
        action: CustomerResponseAction,
        result: Result<(), ApiError>,
    ) -> SubmissionOutcome {
        self.in_flight = None;
        match result {
            Ok(()) => SubmissionOutcome::Close(action),
            Err(e) => SubmissionOutcome::StayOpen {
                alert: failure_alert(&e),
            },
        }
    }

    /// Label for a footer button: "Sending..." only on the pressed one
    pub fn label(&self, action: CustomerResponseAction) -> &'static str {
        match (self.in_flight == Some(action), action) {
            (true, _) => " Sending...",
            (false, CustomerResponseAction::Accept) => " Accept",
            (false, CustomerResponseAction::Reject) => " Reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submit_is_refused() {
        let mut submission = Submission::default();
        assert!(submission.begin(CustomerResponseAction::Accept));
        assert!(!submission.begin(CustomerResponseAction::Reject));
        assert_eq!(submission.in_flight, Some(CustomerResponseAction::Accept));
    }

    #[test]
    fn test_success_closes_with_pressed_action() {
        let mut submission = Submission::default();
        submission.begin(CustomerResponseAction::Reject);
        assert_eq!(
            submission.finish(CustomerResponseAction::Reject, Ok(())),
            SubmissionOutcome::Close(CustomerResponseAction::Reject)
        );
        assert!(!submission.is_busy());
    }

    #[test]
    fn test_rejected_reply_stays_open() {
        let mut submission = Submission::default();
        submission.begin(CustomerResponseAction::Accept);
        let outcome = submission.finish(
            CustomerResponseAction::Accept,
            Err(ApiError::Rejected(Some("Already responded".to_string()))),
        );
        assert_eq!(
            outcome,
            SubmissionOutcome::StayOpen {
                alert: "Error: Already responded".to_string()
            }
        );
        // buttons come back for the retry
        assert!(!submission.is_busy());
        assert!(submission.begin(CustomerResponseAction::Accept));
    }

    #[test]
    fn test_transport_failure_stays_open() {
        let mut submission = Submission::default();
        submission.begin(CustomerResponseAction::Accept);
        let outcome = submission.finish(
            CustomerResponseAction::Accept,
            Err(ApiError::Network("offline".to_string())),
        );
        assert_eq!(
            outcome,
            SubmissionOutcome::StayOpen {
                alert: "Error processing your response. Please try again.".to_string()
            }
        );
    }

    #[test]
    fn test_sending_label_follows_pressed_button() {
        let mut submission = Submission::default();
        assert_eq!(submission.label(CustomerResponseAction::Accept), " Accept");
        assert_eq!(submission.label(CustomerResponseAction::Reject), " Reject");

        submission.begin(CustomerResponseAction::Reject);
        assert_eq!(submission.label(CustomerResponseAction::Reject), " Sending...");
        assert_eq!(submission.label(CustomerResponseAction::Accept), " Accept");
    }
}
