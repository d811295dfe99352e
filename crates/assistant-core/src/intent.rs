//! Keyword-based intent matching.
//!
//! Input is lowercased and tested for substring containment against a fixed
//! table. The first intent with a matching keyword wins.

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SetReminder,
    ViewReminders,
    DeleteReminder,
    Unknown,
}

/// Ordered keyword table; order decides ties such as "show me how to add".
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::SetReminder, &["set", "add", "new reminder"]),
    (Intent::ViewReminders, &["view", "show", "list"]),
    (Intent::DeleteReminder, &["delete", "remove"]),
];

/// Medication the dispatcher recognises while awaiting a name
pub const KNOWN_MEDICATION: &str = "brukinsa";

pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

impl Intent {
    /// Classify already-normalized input
    pub fn classify(normalized: &str) -> Intent {
        INTENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Unknown)
    }
}

/// True when normalized input names the known medication
pub fn names_known_medication(normalized: &str) -> bool {
    normalized.contains(KNOWN_MEDICATION)
}
