use crate::domain::model::ContactSubmission;

/// Destination a received submission is reported to.
///
/// Implementations must not fail the request: the endpoint acknowledges every
/// submission it receives.
pub trait ContactSink: Send + Sync {
    fn record(&self, submission: &ContactSubmission);
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn body_limit(&self) -> usize;
}
