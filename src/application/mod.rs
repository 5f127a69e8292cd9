//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `VendingEngine`, the one owner of the machine's
//! state. Transports share it behind an `Arc` and go through its methods; a
//! single mutex covers coins and inventory together.

pub mod engine;
