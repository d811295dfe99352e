//! Canned response text.

use assistant_types::reminder::Reminder;

pub const SET_REMINDER_PROMPT: &str =
    "Let's set a medication reminder. Please enter the medication name (For example: Brukinsa):";

pub const NO_REMINDERS: &str = "You don't have any medication reminders set.";

pub const LISTING_HEADER: &str = "Here are your current reminders:";

pub const REMINDER_DELETED: &str = "Reminder deleted successfully.";

pub const REMINDER_NOT_FOUND: &str = "Reminder not found.";

pub const FALLBACK: &str = "I'm sorry, I didn't understand that. \
Would you like to set a reminder, view your reminders, or delete a reminder?";

pub const BRUKINSA_INFO: &str = "Important information about Brukinsa:
• Take 320 mg daily (4 capsules of 80 mg each)
• Can be taken as either:
  - Once daily (4 capsules at once) OR
  - Twice daily (2 capsules twice a day)
• Take with water
• Can be taken with or without food
• If a dose is missed, take it as soon as possible on the same day
Would you like to set a reminder for Brukinsa?";

pub fn greeting(user_name: &str) -> String {
    format!(
        "Hello {}! I'm your healthcare AI assistant. I can help you:\n\
         1. Set medication reminders\n\
         2. View your reminders\n\
         3. Delete reminders\n\
         What would you like to do?",
        user_name
    )
}

pub fn reminder_set(reminder: &Reminder) -> String {
    format!(
        "Reminder set for {} at {}, {}",
        reminder.medication, reminder.time, reminder.frequency
    )
}

/// Header plus one line per reminder, or the empty-store sentence
pub fn listing(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return NO_REMINDERS.to_string();
    }
    let mut out = String::from(LISTING_HEADER);
    for reminder in reminders {
        out.push('\n');
        out.push_str(&reminder.listing_line());
    }
    out
}
