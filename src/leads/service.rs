use crate::leads::form::LeadForm;
use crate::leads::traits::LeadSink;
use crate::leads::LeadError;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Confirmation shown after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub submitted_at: DateTime<Utc>,
    pub destination: String,
}

/// Validates and forwards leads, one submission at a time
pub struct LeadService<S> {
    sink: S,
    submitting: AtomicBool,
}

// Clears the in-flight flag when the submission finishes, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: LeadSink> LeadService<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submit the form. Invalid forms never reach the sink; the form is
    /// cleared only after the sink accepts the lead.
    pub async fn submit(&self, form: &mut LeadForm) -> Result<SubmissionReceipt, LeadError> {
        form.validate().map_err(LeadError::Invalid)?;

        let _guard = InFlight::acquire(&self.submitting).ok_or(LeadError::InFlight)?;

        let lead = form.trimmed();
        if let Err(e) = self.sink.send(&lead).await {
            warn!("Lead submission to {} failed: {}", self.sink.destination(), e);
            return Err(e);
        }

        info!("Lead submitted to {}", self.sink.destination());
        form.clear();
        Ok(SubmissionReceipt {
            submitted_at: Utc::now(),
            destination: self.sink.destination().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::form::Field;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<LeadForm>>,
        fail_with: Option<u16>,
    }

    #[async_trait]
    impl LeadSink for RecordingSink {
        async fn send(&self, lead: &LeadForm) -> Result<(), LeadError> {
            self.sent.lock().unwrap().push(lead.clone());
            match self.fail_with {
                Some(status) => Err(LeadError::Server { status }),
                None => Ok(()),
            }
        }

        fn destination(&self) -> &str {
            "memory"
        }
    }

    struct GatedSink {
        release: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LeadSink for GatedSink {
        async fn send(&self, _lead: &LeadForm) -> Result<(), LeadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(())
        }

        fn destination(&self) -> &str {
            "gated"
        }
    }

    fn valid() -> LeadForm {
        LeadForm::new(
            "Alex Morgan",
            "alex@example.com",
            "702-555-0142",
            "  Please call about Tower 3.  ",
        )
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_sink() {
        let service = LeadService::new(RecordingSink::default());
        let mut form = LeadForm {
            email: "not-an-email".to_string(),
            ..valid()
        };

        let err = service.submit(&mut form).await.unwrap_err();
        match err {
            LeadError::Invalid(errors) => {
                assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(service.sink.sent.lock().unwrap().is_empty());
        assert_eq!(form.email, "not-an-email");
    }

    #[tokio::test]
    async fn valid_form_sends_once_and_clears() {
        let service = LeadService::new(RecordingSink::default());
        let mut form = valid();

        let receipt = service.submit(&mut form).await.unwrap();
        assert_eq!(receipt.destination, "memory");

        let sent = service.sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "Please call about Tower 3.");
        assert_eq!(form, LeadForm::default());
        assert!(!service.is_submitting());
    }

    #[tokio::test]
    async fn failure_keeps_form_and_releases_flag() {
        let service = LeadService::new(RecordingSink {
            fail_with: Some(502),
            ..Default::default()
        });
        let mut form = valid();

        let err = service.submit(&mut form).await.unwrap_err();
        assert!(matches!(err, LeadError::Server { status: 502 }));
        assert_eq!(form, valid());
        assert!(!service.is_submitting());

        // User-initiated resubmission is allowed
        assert!(service.submit(&mut form).await.is_err());
        assert_eq!(service.sink.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn second_submission_rejected_while_in_flight() {
        let release = Arc::new(Notify::new());
        let service = LeadService::new(GatedSink {
            release: release.clone(),
            calls: AtomicUsize::new(0),
        });
        let mut first = valid();
        let mut second = valid();

        let (first_result, second_result, _) = tokio::join!(
            service.submit(&mut first),
            service.submit(&mut second),
            async { release.notify_one() },
        );

        assert!(first_result.is_ok());
        assert!(matches!(second_result, Err(LeadError::InFlight)));
        assert_eq!(service.sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second, valid());
        assert!(!service.is_submitting());
    }
}
