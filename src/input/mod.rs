//! Input adapters for the explorer.

pub mod gui;
