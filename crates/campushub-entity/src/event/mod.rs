//! Campus event entities: events, announcements, ads, and per-user
//! event reminders.

pub mod model;
pub mod reminder;

pub use model::{Event, EventPatch, EventType, NewEvent};
pub use reminder::EventReminder;
