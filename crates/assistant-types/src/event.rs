use serde::{Deserialize, Serialize};
use crate::reminder::{Reminder, ReminderId};
use crate::session::ConversationState;

/// Events emitted by the dialogue dispatcher.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssistantEvent {
    /// Dispatcher started handling a user line
    TurnStart { turn_id: u64 },

    /// The first input of the session was captured as the user's name
    NameCaptured { name: String },

    /// Conversation state moved
    StateChanged { from: ConversationState, to: ConversationState },

    /// A reminder was appended to the store
    ReminderAdded { reminder: Reminder },

    /// A reminder was removed from the store
    ReminderRemoved { id: ReminderId },

    /// The response text for this turn
    Reply { text: String },

    /// Dispatcher finished the current turn
    TurnEnd { turn_id: u64 },
}
