//! Dialogue dispatcher — maps one line of user input to one reply.
//!
//! Each call to `handle` runs these rules in order and stops at the first hit:
//! 1. Capture the user's name from the first input of the session
//! 2. If a medication name is pending and the input names Brukinsa, reply with dosing info
//! 3. Match set / view / delete keywords
//! 4. Otherwise ask the user to pick one of those
//!
//! `handle` is total: every input yields a reply, nothing is surfaced as an error.

use std::rc::Rc;
use assistant_types::{
    event::AssistantEvent,
    reminder::ReminderId,
    session::{ConversationState, DialogueSession, Trigger},
};
use crate::event_bus::EventBus;
use crate::intent::{self, Intent};
use crate::ports::ReminderPort;
use crate::replies;

pub struct DialogueDispatcher {
    session: DialogueSession,
    store: Rc<dyn ReminderPort>,
    event_bus: EventBus,
    turn_counter: u64,
}

impl DialogueDispatcher {
    pub fn new(store: Rc<dyn ReminderPort>, event_bus: EventBus) -> Self {
        Self {
            session: DialogueSession::new(),
            store,
            event_bus,
            turn_counter: 0,
        }
    }

    pub fn session(&self) -> &DialogueSession {
        &self.session
    }

    pub fn state(&self) -> ConversationState {
        self.session.state
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session.user_name.as_deref()
    }

    pub fn store(&self) -> &Rc<dyn ReminderPort> {
        &self.store
    }

    /// Id of the most recent `handle` call; 0 before the first one
    pub fn last_turn_id(&self) -> u64 {
        self.turn_counter
    }

    /// Handle one line of input and return the reply.
    pub fn handle(&mut self, input: &str) -> String {
        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.event_bus.emit(AssistantEvent::TurnStart { turn_id });

        let reply = self.respond(input);

        self.event_bus.emit(AssistantEvent::Reply { text: reply.clone() });
        self.event_bus.emit(AssistantEvent::TurnEnd { turn_id });
        reply
    }

    fn respond(&mut self, input: &str) -> String {
        if !self.session.has_name() {
            self.session.user_name = Some(input.to_string());
            self.event_bus.emit(AssistantEvent::NameCaptured {
                name: input.to_string(),
            });
            log::debug!("Captured user name");
            return replies::greeting(input);
        }

        let normalized = intent::normalize(input);

        if self.session.state == ConversationState::AwaitingMedicationName
            && intent::names_known_medication(&normalized)
        {
            self.apply(Trigger::MedicationNamed);
            return replies::BRUKINSA_INFO.to_string();
        }

        let intent = Intent::classify(&normalized);
        log::debug!("Intent: {:?}", intent);
        match intent {
            Intent::SetReminder => {
                self.apply(Trigger::ReminderRequested);
                replies::SET_REMINDER_PROMPT.to_string()
            }
            Intent::ViewReminders => self.list_reminders(),
            // No identifier is collected from the user here.
            Intent::DeleteReminder => self.delete_reminder(None),
            Intent::Unknown => replies::FALLBACK.to_string(),
        }
    }

    fn apply(&mut self, trigger: Trigger) {
        let (from, to) = self.session.apply(trigger);
        if from != to {
            log::debug!("Conversation state {:?} -> {:?}", from, to);
            self.event_bus.emit(AssistantEvent::StateChanged { from, to });
        }
    }

    /// Create a reminder and return the confirmation text.
    /// Not reachable from `handle`; hosts call it directly.
    pub fn add_reminder(&mut self, medication: &str, time: &str, frequency: &str) -> String {
        let reminder = self.store.add(medication, time, frequency);
        let reply = replies::reminder_set(&reminder);
        self.event_bus.emit(AssistantEvent::ReminderAdded { reminder });
        reply
    }

    pub fn list_reminders(&self) -> String {
        replies::listing(&self.store.list())
    }

    pub fn delete_reminder(&mut self, id: Option<ReminderId>) -> String {
        match id {
            Some(id) if self.store.remove_by_id(id) => {
                self.event_bus.emit(AssistantEvent::ReminderRemoved { id });
                replies::REMINDER_DELETED.to_string()
            }
            _ => replies::REMINDER_NOT_FOUND.to_string(),
        }
    }
}
