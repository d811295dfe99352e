pub mod event_bus;
pub mod ports;
pub mod store;
pub mod intent;
pub mod replies;
pub mod dispatcher;


pub use dispatcher::DialogueDispatcher;
pub use store::ReminderStore;
