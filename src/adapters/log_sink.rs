use crate::domain::model::ContactSubmission;
use crate::domain::ports::ContactSink;

/// Reports each submission as a single line in the process log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }

    pub fn format_line(submission: &ContactSubmission) -> String {
        format!(
            "New Message from {}: {}",
            submission.display_name(),
            submission.display_message()
        )
    }
}

impl ContactSink for LogSink {
    fn record(&self, submission: &ContactSubmission) {
        tracing::info!("📨 {}", Self::format_line(submission));
        tracing::debug!(email = %submission.display_email(), "Sender contact address");
    }
}
