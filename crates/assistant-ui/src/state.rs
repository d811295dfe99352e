//! UI-level state that drives rendering.
//! This is a read-only projection of the dispatcher's session,
//! updated each frame by draining the EventBus.

use assistant_types::event::AssistantEvent;
use assistant_types::session::ConversationState;

/// State visible to UI panels
pub struct UiState {
    /// Displayed messages (user + bot)
    pub messages: Vec<ChatEntry>,
    /// Mirrors the dispatcher's conversation state
    pub conversation_state: ConversationState,
    /// Name captured from the first message, once known
    pub user_name: Option<String>,
    /// Size of the reminder store, synced by the host each frame
    pub reminder_count: usize,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

/// A chat entry for display
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub role: String,
    pub content: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            conversation_state: ConversationState::Idle,
            user_name: None,
            reminder_count: 0,
            input_text: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AssistantEvent>) {
        for event in events {
            match event {
                AssistantEvent::TurnStart { .. } | AssistantEvent::TurnEnd { .. } => {}
                AssistantEvent::NameCaptured { name } => {
                    self.user_name = Some(name);
                }
                AssistantEvent::StateChanged { to, .. } => {
                    self.conversation_state = to;
                    self.status_text = match to {
                        ConversationState::Idle => "Ready".to_string(),
                        ConversationState::AwaitingMedicationName => {
                            "Waiting for medication name".to_string()
                        }
                    };
                }
                // The count is read from the store; see `sync_reminder_count`
                AssistantEvent::ReminderAdded { .. } | AssistantEvent::ReminderRemoved { .. } => {}
                AssistantEvent::Reply { text } => {
                    self.push_bot_message(&text);
                }
            }
        }
    }

    /// Add a user message to the display
    pub fn push_user_message(&mut self, text: &str) {
        self.messages.push(ChatEntry {
            role: "user".to_string(),
            content: text.to_string(),
        });
    }

    pub fn push_bot_message(&mut self, text: &str) {
        self.messages.push(ChatEntry {
            role: "bot".to_string(),
            content: text.to_string(),
        });
    }

    /// Take the store size as the source of truth, since hosts may add or
    /// remove reminders without going through the dispatcher.
    pub fn sync_reminder_count(&mut self, count: usize) {
        self.reminder_count = count;
    }

    /// Status text followed by the reminder count
    pub fn status_line(&self) -> String {
        let noun = if self.reminder_count == 1 { "reminder" } else { "reminders" };
        format!("{} · {} {}", self.status_text, self.reminder_count, noun)
    }

    /// Banner line naming the user, once a non-blank name was captured
    pub fn chatting_with(&self) -> Option<String> {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| format!("Chatting with {}", name))
    }

    /// Trimmed input if it is worth sending, clearing the field.
    /// Blank input is left in place and never submitted.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input_text.clear();
        Some(text)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
