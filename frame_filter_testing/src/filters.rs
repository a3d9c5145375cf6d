//! Instrumented filter for exercising chain mechanics.

use frame_filter::{Frame, FrameFilter, FrameKind, Result, Transport};

/// Discards every frame of one kind and counts hook invocations.
#[derive(Debug)]
pub struct KindFilter {
    name: String,
    kind: FrameKind,
    /// Number of times [`FrameFilter::prepare`] ran.
    pub prepare_calls: usize,
    /// Number of times [`FrameFilter::reply`] ran.
    pub reply_calls: usize,
}

impl KindFilter {
    /// Discard frames of `kind`, reporting under `name`.
    pub fn new(name: impl Into<String>, kind: FrameKind) -> Self {
        Self {
            name: name.into(),
            kind,
            prepare_calls: 0,
            reply_calls: 0,
        }
    }
}

impl FrameFilter for KindFilter {
    fn name(&self) -> &str { &self.name }

    fn prepare(&mut self) { self.prepare_calls += 1; }

    fn matches(&self, frame: &Frame) -> bool { frame.kind() == self.kind }

    fn reply(&mut self, _transport: &mut dyn Transport, _frame: &Frame) -> Result<()> {
        self.reply_calls += 1;
        Ok(())
    }
}
