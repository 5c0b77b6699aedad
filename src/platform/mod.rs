//! Platform abstraction layer
//!
//! Browser-facing pieces that stay testable natively:
//! - Keyboard state capture

pub mod input;

pub use input::KeyState;
