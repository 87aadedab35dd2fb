//! Ocular overlay controller.
//!
//! Owns the menu state derived from host target events, the activation
//! cooldown, and the outbound callback client. Rendering itself is left to
//! whoever consumes the derived [`MenuFrame`]; this crate only decides what
//! is on screen.

pub mod callback;
pub mod config;
pub mod controller;
pub mod cooldown;
pub mod render;
pub mod state;

// Re-exports for convenience
pub use callback::{CallbackError, HostClient, SelectionSink};
pub use config::OverlayConfig;
pub use controller::MenuController;
pub use cooldown::{ActivationGate, CardKey};
pub use render::{render, Card, CardAction, MenuFrame};
pub use state::MenuState;
