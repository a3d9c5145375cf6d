//! Transport replaying a scripted timeline.

use std::{collections::VecDeque, rc::Rc, time::Duration};

use frame_filter::{Frame, Result, Transport, TransportError};

use crate::ManualClock;

enum Outcome {
    Frame(Frame),
    Fail(TransportError),
}

struct Step {
    delay: Duration,
    outcome: Outcome,
}

/// [`Transport`] delivering scripted frames after scripted delays.
///
/// Each step becomes available `delay` after the previous step was
/// consumed. A receive whose timeout is shorter than the pending delay
/// advances the clock by the timeout and fails with
/// [`TransportError::Timeout`]; the step keeps the rest of its delay. With
/// the script exhausted every receive times out.
pub struct ScriptedTransport {
    clock: Rc<ManualClock>,
    script: VecDeque<Step>,
    sent: Vec<Frame>,
    receive_timeouts: Vec<Duration>,
    send_error: Option<TransportError>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script.
    pub fn new(clock: Rc<ManualClock>) -> Self {
        Self {
            clock,
            script: VecDeque::new(),
            sent: Vec::new(),
            receive_timeouts: Vec::new(),
            send_error: None,
        }
    }

    /// Deliver `frame` `millis` milliseconds after the previous step.
    #[must_use]
    pub fn frame_after(mut self, millis: u64, frame: Frame) -> Self {
        self.script.push_back(Step {
            delay: Duration::from_millis(millis),
            outcome: Outcome::Frame(frame),
        });
        self
    }

    /// Fail with `error` `millis` milliseconds after the previous step.
    #[must_use]
    pub fn error_after(mut self, millis: u64, error: TransportError) -> Self {
        self.script.push_back(Step {
            delay: Duration::from_millis(millis),
            outcome: Outcome::Fail(error),
        });
        self
    }

    /// Fail the next send with `error`.
    #[must_use]
    pub fn failing_send(mut self, error: TransportError) -> Self {
        self.send_error = Some(error);
        self
    }

    /// Frames written through [`Transport::send_frame`].
    pub fn sent(&self) -> &[Frame] { &self.sent }

    /// Timeout passed to each receive, in call order.
    pub fn receive_timeouts(&self) -> &[Duration] { &self.receive_timeouts }

    /// Steps not yet consumed.
    pub fn pending(&self) -> usize { self.script.len() }
}

impl Transport for ScriptedTransport {
    fn receive_frame(&mut self, timeout: Duration) -> Result<Frame> {
        self.receive_timeouts.push(timeout);
        let Some(mut step) = self.script.pop_front() else {
            self.clock.advance(timeout);
            return Err(TransportError::Timeout);
        };
        if step.delay > timeout {
            step.delay -= timeout;
            self.script.push_front(step);
            self.clock.advance(timeout);
            return Err(TransportError::Timeout);
        }

        self.clock.advance(step.delay);
        match step.outcome {
            Outcome::Frame(frame) => Ok(frame),
            Outcome::Fail(error) => Err(error),
        }
    }

    fn send_frame(&mut self, frame: &Frame) -> Result<()> {
        if let Some(error) = self.send_error.take() {
            return Err(error);
        }
        self.sent.push(frame.clone());
        Ok(())
    }
}
