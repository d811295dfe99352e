use std::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a stored reminder.
/// Derived from the creation time in Unix milliseconds, bumped by the store
/// so that it is strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub u64);

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A medication reminder. Fields are free text and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub medication: String,
    pub time: String,
    pub frequency: String,
    pub created_at: String,
}

impl Reminder {
    pub fn new(
        id: ReminderId,
        medication: impl Into<String>,
        time: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id,
            medication: medication.into(),
            time: time.into(),
            frequency: frequency.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// One line of the reminder listing: `- <medication> at <time>, <frequency>`
    pub fn listing_line(&self) -> String {
        format!("- {} at {}, {}", self.medication, self.time, self.frequency)
    }
}
