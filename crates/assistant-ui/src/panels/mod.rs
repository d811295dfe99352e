pub mod chat;
pub mod welcome;
