//! Host-channel wiring for the Ocular overlay controller.

pub mod bridge;

pub use bridge::{run_menu_bridge, BridgeInput};
