//! Port traits — the boundary between the dispatcher and reminder storage.
//!
//! The dispatcher only sees `ReminderPort`; `ReminderStore` is the in-memory
//! implementation. Methods take `&self` so one store can be shared through
//! `Rc<dyn ReminderPort>` by the dispatcher and its host.

use assistant_types::reminder::{Reminder, ReminderId};

pub trait ReminderPort {
    /// Append a reminder with a fresh identifier and return it
    fn add(&self, medication: &str, time: &str, frequency: &str) -> Reminder;

    /// All reminders in insertion order
    fn list(&self) -> Vec<Reminder>;

    /// Remove the reminder with this identifier. Returns whether one was removed.
    fn remove_by_id(&self, id: ReminderId) -> bool;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
