//! Domain layer: the machine's state and the rules that mutate it.
//!
//! Nothing in here locks. Every mutating operation takes `&mut self`, so the
//! caller that owns the state (see [`crate::application::engine::VendingEngine`])
//! decides how exclusion is enforced.

pub mod coin;
pub mod inventory;
pub mod purchase;
pub mod state;
