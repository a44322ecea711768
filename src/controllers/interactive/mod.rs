//! Interactive controller for live field exploration.
//!
//! The application layer between the input adapter and the core: it owns
//! the render worker, rate-limits submissions through the update gate, and
//! dispatches completed frames to the presentation layer through a port.

pub mod controller;
pub mod data;
pub mod debounce;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
