//! In-memory reminder store.
//! Lives for the page lifetime; nothing is persisted.

use std::cell::{Cell, RefCell};
use assistant_types::reminder::{Reminder, ReminderId};
use crate::ports::ReminderPort;

pub struct ReminderStore {
    reminders: RefCell<Vec<Reminder>>,
    last_id: Cell<u64>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self {
            reminders: RefCell::new(Vec::new()),
            last_id: Cell::new(0),
        }
    }

    /// Current time in Unix milliseconds, or the previous id + 1 if the clock
    /// has not moved past it.
    fn next_id(&self) -> ReminderId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id.get() + 1);
        self.last_id.set(id);
        ReminderId(id)
    }
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderPort for ReminderStore {
    fn add(&self, medication: &str, time: &str, frequency: &str) -> Reminder {
        let reminder = Reminder::new(self.next_id(), medication, time, frequency);
        self.reminders.borrow_mut().push(reminder.clone());
        log::info!("Reminder {} added for {}", reminder.id, reminder.medication);
        reminder
    }

    fn list(&self) -> Vec<Reminder> {
        self.reminders.borrow().clone()
    }

    fn remove_by_id(&self, id: ReminderId) -> bool {
        let mut reminders = self.reminders.borrow_mut();
        match reminders.iter().position(|r| r.id == id) {
            Some(index) => {
                reminders.remove(index);
                log::info!("Reminder {} removed", id);
                true
            }
            None => {
                log::debug!("Reminder {} not found", id);
                false
            }
        }
    }

    fn len(&self) -> usize {
        self.reminders.borrow().len()
    }
}
