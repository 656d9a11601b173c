use crate::notice::NoticeKind;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/mnnblaog";

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Guards the idle -> submitting -> idle cycle of the contact form.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    submitting: bool,
}

impl SubmitGate {
    /// Returns false when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.submitting, true)
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected { status: u16 },
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn from_status(ok: bool, status: u16) -> Self {
        if ok {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Rejected { status }
        }
    }

    pub fn notice(&self) -> (&'static str, NoticeKind) {
        match self {
            SubmitOutcome::Sent => (SENT_MESSAGE, NoticeKind::Success),
            SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed { .. } => {
                (FAILED_MESSAGE, NoticeKind::Error)
            }
        }
    }
}
