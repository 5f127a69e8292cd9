//! Transports that expose the engine to the outside world.

pub mod http;
