//! Main egui application — composes the panels and drives the dispatcher.

use std::rc::Rc;

use egui::{self, CentralPanel, TopBottomPanel};

use assistant_core::dispatcher::DialogueDispatcher;
use assistant_core::event_bus::EventBus;
use assistant_core::ports::ReminderPort;
use assistant_core::store::ReminderStore;
use assistant_types::config::AssistantConfig;
use assistant_ui::panels::{chat, welcome};
use assistant_ui::state::UiState;
use assistant_ui::theme;

/// The main application state
pub struct AssistantApp {
    ui_state: UiState,
    config: AssistantConfig,
    event_bus: EventBus,
    dispatcher: DialogueDispatcher,
    first_frame: bool,
}

impl AssistantApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AssistantConfig) -> Self {
        let event_bus = EventBus::new();
        let store: Rc<dyn ReminderPort> = Rc::new(ReminderStore::new());
        let dispatcher = DialogueDispatcher::new(store, event_bus.clone());

        let mut ui_state = UiState::new();
        ui_state.push_bot_message(&config.welcome_message);

        Self {
            ui_state,
            config,
            event_bus,
            dispatcher,
            first_frame: true,
        }
    }

    /// Run one dialogue turn and fold only that turn's events into the UI.
    fn dispatch_message(&mut self, text: String) {
        self.dispatcher.handle(&text);
        let turn = self.event_bus.drain_turn(self.dispatcher.last_turn_id());
        self.ui_state.process_events(turn);
        self.ui_state.sync_reminder_count(self.dispatcher.store().len());
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Events emitted outside a turn, e.g. direct reminder operations
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }
        self.ui_state.sync_reminder_count(self.dispatcher.store().len());

        // ── Welcome banner ───────────────────────────────────
        TopBottomPanel::top("welcome_banner")
            .show_separator_line(false)
            .show(ctx, |ui| {
                welcome::welcome_panel(ui, &self.config, &self.ui_state);
            });

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(user_msg) = chat::chat_panel(ui, &mut self.ui_state, &self.config) {
                    self.dispatch_message(user_msg);
                    ctx.request_repaint();
                }
            });
        });
    }
}
