use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, thread-local counters for engine calls.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub shapes: BTreeMap<String, u64>,
    pub outputs: BTreeMap<String, OutputCounters>,
    pub rejections: BTreeMap<String, u64>,
}

impl EventState {
    /// True when nothing has been recorded since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Entry points
    pub classify_calls: u64,
    pub reduce_calls: u64,
    pub materialize_calls: u64,
    pub rejected_calls: u64,

    // Work
    pub groups_reduced: u64,
    pub elements_folded: u64,
    pub sums_written: u64,
    pub slots_allocated: u64,
}

///
/// OutputCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OutputCounters {
    pub calls: u64,
    pub written: u64,
    pub capacity: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Bump a labelled counter.
pub(crate) fn bump(map: &mut BTreeMap<String, u64>, label: &str) {
    let entry = map.entry(label.to_string()).or_default();
    *entry = entry.saturating_add(1);
}

///
/// EventReport
/// Counter snapshot plus derived per-output averages.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EventReport {
    /// `None` when nothing was recorded since the last reset.
    pub counters: Option<EventState>,
    pub output_summaries: Vec<OutputSummary>,
}

///
/// OutputSummary
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OutputSummary {
    pub output: String,
    pub calls: u64,
    pub avg_written_per_call: f64,
    /// Share of allocated capacity left unoccupied (padding).
    pub unused_capacity_ratio: f64,
}

#[expect(clippy::cast_precision_loss)]
fn summarize(output: &str, counters: &OutputCounters) -> OutputSummary {
    let avg_written_per_call = if counters.calls == 0 {
        0.0
    } else {
        counters.written as f64 / counters.calls as f64
    };
    let unused_capacity_ratio = if counters.capacity == 0 {
        0.0
    } else {
        counters.capacity.saturating_sub(counters.written) as f64 / counters.capacity as f64
    };

    OutputSummary {
        output: output.to_string(),
        calls: counters.calls,
        avg_written_per_call,
        unused_capacity_ratio,
    }
}

/// Build a report from the current thread's counters.
pub(crate) fn report() -> EventReport {
    with_state(|m| {
        if m.is_empty() {
            return EventReport::default();
        }

        let output_summaries = m
            .outputs
            .iter()
            .map(|(output, counters)| summarize(output, counters))
            .collect();

        EventReport {
            counters: Some(m.clone()),
            output_summaries,
        }
    })
}
