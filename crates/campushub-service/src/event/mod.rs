//! Campus event management and the reminder lifecycle.

pub mod service;

pub use service::EventService;
