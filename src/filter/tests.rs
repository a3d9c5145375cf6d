//! Unit tests for chain assembly and the node receive loop.

use std::{
    cell::Cell,
    collections::VecDeque,
    rc::Rc,
    time::{Duration, Instant},
};

use bytes::Bytes;
use rstest::{fixture, rstest};

use super::{FilterChain, FilterNode, FrameFilter, SharedFilter, shared};
use crate::{
    clock::Clock,
    error::{Result, TransportError},
    frame::{Frame, FrameKind},
    report::DiscardRecord,
    transport::Transport,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct TickClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl Clock for TickClock {
    fn now(&self) -> Instant { self.base + self.offset.get() }
}

/// Delivers queued frames, each taking `cost` on the shared clock.
struct QueueTransport {
    clock: Rc<TickClock>,
    cost: Duration,
    frames: VecDeque<Frame>,
    timeouts: Vec<Duration>,
}

impl QueueTransport {
    fn new(clock: Rc<TickClock>, cost_ms: u64, frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            clock,
            cost: Duration::from_millis(cost_ms),
            frames: frames.into_iter().collect(),
            timeouts: Vec::new(),
        }
    }
}

impl Transport for QueueTransport {
    fn receive_frame(&mut self, timeout: Duration) -> Result<Frame> {
        self.timeouts.push(timeout);
        if self.cost > timeout {
            self.clock.offset.set(self.clock.offset.get() + timeout);
            return Err(TransportError::Timeout);
        }
        self.clock.offset.set(self.clock.offset.get() + self.cost);
        self.frames.pop_front().ok_or(TransportError::Closed)
    }

    fn send_frame(&mut self, _frame: &Frame) -> Result<()> { Ok(()) }
}

struct Discards {
    name: &'static str,
    kind: FrameKind,
    prepared: Rc<Cell<usize>>,
}

impl FrameFilter for Discards {
    fn name(&self) -> &str { self.name }

    fn prepare(&mut self) { self.prepared.set(self.prepared.get() + 1); }

    fn matches(&self, frame: &Frame) -> bool { frame.kind() == self.kind }
}

fn discards(name: &'static str, kind: FrameKind) -> SharedFilter {
    shared(Discards {
        name,
        kind,
        prepared: Rc::default(),
    })
}

fn labels(records: &[DiscardRecord]) -> Vec<&str> {
    records.iter().map(|r| r.label.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[fixture]
fn clock() -> Rc<TickClock> {
    Rc::new(TickClock {
        base: Instant::now(),
        offset: Cell::default(),
    })
}

// ---------------------------------------------------------------------------
// Chain assembly
// ---------------------------------------------------------------------------

#[test]
fn set_next_appends_at_tail() {
    let mut head = FilterNode::new(discards("a", FrameKind::Ping));
    head.set_next(discards("b", FrameKind::Pong));
    head.set_next(discards("c", FrameKind::Close));

    assert_eq!(
        head.chain_description(),
        "Frame Filter 'a' -> Frame Filter 'b' -> Frame Filter 'c'"
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn appending_linked_filter_is_ignored(#[case] repeat_index: usize) {
    let filters = [
        discards("a", FrameKind::Ping),
        discards("b", FrameKind::Pong),
        discards("c", FrameKind::Close),
    ];
    let mut chain = FilterChain::new();
    for filter in &filters {
        chain.append(filter.clone());
    }
    let before = chain.to_string();

    chain.append(filters[repeat_index].clone());

    assert_eq!(chain.to_string(), before);
    assert_eq!(chain.len(), 3);
}

#[test]
fn filters_with_equal_names_are_distinct() {
    let chain = FilterChain::new()
        .with_filter(discards("same", FrameKind::Ping))
        .with_filter(discards("same", FrameKind::Ping));
    assert_eq!(chain.filter_names(), ["same", "same"]);
}

#[test]
fn empty_chain_renders_placeholder() {
    let chain = FilterChain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.to_string(), "<empty chain>");
}

// ---------------------------------------------------------------------------
// Receive loop
// ---------------------------------------------------------------------------

#[rstest]
fn empty_chain_reads_transport_directly(clock: Rc<TickClock>) {
    let chain = FilterChain::with_clock(clock.clone());
    let mut transport = QueueTransport::new(clock, 1, [Frame::ping(vec![1])]);
    let mut records: Vec<DiscardRecord> = Vec::new();

    let frame = chain
        .receive_frame(&mut transport, Duration::from_millis(10), &mut records)
        .expect("frame");

    assert_eq!(frame, Frame::ping(vec![1]));
    assert!(records.is_empty());
}

#[rstest]
fn terminal_node_passes_shrinking_timeout(clock: Rc<TickClock>) {
    let node = FilterNode::new(discards("pings", FrameKind::Ping));
    let mut transport = QueueTransport::new(
        clock.clone(),
        5,
        [Frame::ping(Bytes::new()), Frame::ping(Bytes::new()), Frame::text("x")],
    );
    let mut records: Vec<DiscardRecord> = Vec::new();

    let frame = node
        .receive_frame(
            &mut transport,
            Duration::from_millis(100),
            &*clock,
            &mut records,
        )
        .expect("frame");

    assert_eq!(frame, Frame::text("x"));
    assert_eq!(transport.timeouts, [100, 95, 90].map(Duration::from_millis));
    assert_eq!(records.len(), 2);
}

#[rstest]
fn prepare_runs_once_per_call_per_node(clock: Rc<TickClock>) {
    let prepared_a = Rc::new(Cell::new(0));
    let prepared_b = Rc::new(Cell::new(0));
    let chain = FilterChain::with_clock(clock.clone())
        .with_filter(shared(Discards {
            name: "a",
            kind: FrameKind::Ping,
            prepared: prepared_a.clone(),
        }))
        .with_filter(shared(Discards {
            name: "b",
            kind: FrameKind::Pong,
            prepared: prepared_b.clone(),
        }));
    let mut transport = QueueTransport::new(
        clock,
        1,
        [Frame::ping(Bytes::new()), Frame::ping(Bytes::new()), Frame::text("x")],
    );
    let mut records: Vec<DiscardRecord> = Vec::new();

    chain
        .receive_frame(&mut transport, Duration::from_millis(50), &mut records)
        .expect("frame");

    // The head retries twice, each retry re-entering the successor.
    assert_eq!(prepared_a.get(), 1);
    assert_eq!(prepared_b.get(), 3);
}

#[rstest]
fn successor_discards_are_reported_first(clock: Rc<TickClock>) {
    let chain = FilterChain::with_clock(clock.clone())
        .with_filter(discards("outer", FrameKind::Ping))
        .with_filter(discards("inner", FrameKind::Pong));
    let mut transport = QueueTransport::new(
        clock,
        1,
        [
            Frame::pong(Bytes::new()),
            Frame::ping(Bytes::new()),
            Frame::pong(Bytes::new()),
            Frame::text("x"),
        ],
    );
    let mut records: Vec<DiscardRecord> = Vec::new();

    let frame = chain
        .receive_frame(&mut transport, Duration::from_millis(50), &mut records)
        .expect("frame");

    assert_eq!(frame, Frame::text("x"));
    assert_eq!(
        labels(&records),
        [
            "Discarded pong frame (by filter 'inner')",
            "Discarded ping frame (by filter 'outer')",
            "Discarded pong frame (by filter 'inner')",
        ]
    );
}

#[rstest]
fn visible_frame_consuming_whole_timeout_is_a_timeout(clock: Rc<TickClock>) {
    let node = FilterNode::new(discards("pings", FrameKind::Ping));
    let mut transport = QueueTransport::new(clock.clone(), 10, [Frame::text("late")]);
    let mut records: Vec<DiscardRecord> = Vec::new();

    let err = node
        .receive_frame(
            &mut transport,
            Duration::from_millis(10),
            &*clock,
            &mut records,
        )
        .expect_err("deadline reached");

    assert!(err.is_timeout());
    assert!(records.is_empty());
}

#[rstest]
fn transport_errors_propagate_unchanged(clock: Rc<TickClock>) {
    let node = FilterNode::new(discards("pings", FrameKind::Ping));
    let mut transport = QueueTransport::new(clock.clone(), 1, Vec::new());
    let mut records: Vec<DiscardRecord> = Vec::new();

    let err = node
        .receive_frame(
            &mut transport,
            Duration::from_millis(10),
            &*clock,
            &mut records,
        )
        .expect_err("queue empty");

    assert!(matches!(err, TransportError::Closed));
}
