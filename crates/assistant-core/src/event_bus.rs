//! Event queue between the dispatcher and the UI.
//!
//! Events of one `handle` call are bracketed by `TurnStart` / `TurnEnd` with
//! the same turn id. The host takes a finished turn with `drain_turn`; events
//! published outside any turn (direct reminder operations) stay queued until
//! the next per-frame `drain`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use assistant_types::event::AssistantEvent;

/// Shared event queue — clone-cheap via Rc, single-threaded.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<AssistantEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: AssistantEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Everything queued, in publish order
    pub fn drain(&self) -> Vec<AssistantEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Remove and return the events of one turn, `TurnStart` through `TurnEnd`.
    /// Events outside that span keep their place in the queue. An unfinished
    /// turn is returned up to the end of the queue; an unknown id yields nothing.
    pub fn drain_turn(&self, turn_id: u64) -> Vec<AssistantEvent> {
        let mut queue = self.queue.borrow_mut();
        let Some(start) = queue
            .iter()
            .position(|e| matches!(e, AssistantEvent::TurnStart { turn_id: id } if *id == turn_id))
        else {
            return Vec::new();
        };
        let end = queue
            .iter()
            .skip(start)
            .position(|e| matches!(e, AssistantEvent::TurnEnd { turn_id: id } if *id == turn_id))
            .map(|offset| start + offset + 1)
            .unwrap_or(queue.len());
        queue.drain(start..end).collect()
    }
}
