//! Reporting of discarded frames.
//!
//! Every frame a filter suppresses produces one [`DiscardRecord`], handed to
//! the caller's [`ReportSink`] in the order frames were pulled from the
//! transport. The chain never reads anything back from the sink.

use crate::frame::Frame;

/// Report describing one suppressed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardRecord {
    /// Short label naming the frame kind and the discarding filter.
    pub label: String,
    /// Whether the discard counts as a successful sub-result.
    pub successful: bool,
    /// Description of the received frame.
    pub message: String,
}

impl DiscardRecord {
    /// Build the record for `frame` discarded by the filter named
    /// `filter_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use frame_filter::{DiscardRecord, Frame};
    ///
    /// let record = DiscardRecord::discarded(&Frame::text("hi"), "chat");
    /// assert_eq!(record.label, "Discarded text frame (by filter 'chat')");
    /// assert_eq!(record.message, "Received text frame with text 'hi'");
    /// assert!(record.successful);
    /// ```
    #[must_use]
    pub fn discarded(frame: &Frame, filter_name: &str) -> Self {
        Self {
            label: format!(
                "Discarded {} frame (by filter '{filter_name}')",
                frame.type_label()
            ),
            successful: true,
            message: format!("Received {frame}"),
        }
    }
}

/// Destination for [`DiscardRecord`]s produced during a receive call.
pub trait ReportSink {
    /// Nest `record` under the current measurement scope.
    fn add_sub_result(&mut self, record: DiscardRecord);
}

impl ReportSink for Vec<DiscardRecord> {
    fn add_sub_result(&mut self, record: DiscardRecord) { self.push(record); }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn add_sub_result(&mut self, record: DiscardRecord) { (**self).add_sub_result(record); }
}

/// Measurement scope for one sampled operation.
///
/// Collects the discard records raised while the operation waited for its
/// frame, alongside the operation's own outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleResult {
    label: String,
    successful: bool,
    response_message: String,
    sub_results: Vec<DiscardRecord>,
}

impl SampleResult {
    /// Create an empty, not yet successful result labelled `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Label of the sampled operation.
    #[must_use]
    pub fn label(&self) -> &str { &self.label }

    /// Whether the sampled operation succeeded.
    #[must_use]
    pub fn is_successful(&self) -> bool { self.successful }

    /// Record the operation's outcome.
    pub fn set_outcome(&mut self, successful: bool, response_message: impl Into<String>) {
        self.successful = successful;
        self.response_message = response_message.into();
    }

    /// Message describing the outcome.
    #[must_use]
    pub fn response_message(&self) -> &str { &self.response_message }

    /// Nested discard records, oldest first.
    #[must_use]
    pub fn sub_results(&self) -> &[DiscardRecord] { &self.sub_results }
}

impl ReportSink for SampleResult {
    fn add_sub_result(&mut self, record: DiscardRecord) { self.sub_results.push(record); }
}
