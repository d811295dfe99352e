use serde::{Deserialize, Serialize};

/// Whether the next input is free dialogue or the answer to a pending prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingMedicationName,
}

/// Inputs that can move the conversation between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The user asked to set, add or create a reminder
    ReminderRequested,
    /// The user named a medication while one was being asked for
    MedicationNamed,
}

impl ConversationState {
    /// Transition table. Pairs not listed here leave the state unchanged.
    pub fn transition(self, trigger: Trigger) -> Self {
        match (self, trigger) {
            (_, Trigger::ReminderRequested) => ConversationState::AwaitingMedicationName,
            (ConversationState::AwaitingMedicationName, Trigger::MedicationNamed) => {
                ConversationState::Idle
            }
            (state, _) => state,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConversationState::Idle => "Idle",
            ConversationState::AwaitingMedicationName => "Awaiting medication name",
        }
    }
}

/// Per-user conversational context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueSession {
    /// Captured from the first input; `None` until then
    pub user_name: Option<String>,
    pub state: ConversationState,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_name(&self) -> bool {
        self.user_name.is_some()
    }

    /// Apply a trigger and return the (previous, next) states
    pub fn apply(&mut self, trigger: Trigger) -> (ConversationState, ConversationState) {
        let from = self.state;
        self.state = from.transition(trigger);
        (from, self.state)
    }
}
