//! Shared payload types for the Ocular selection menu.
//!
//! These types define the wire contract between the host game client and the
//! overlay: inbound target events and the outbound selection payload. Both
//! sides use identical struct definitions for serialization/deserialization.

pub mod entry;
pub mod event;
pub mod selection;

pub use entry::{MenuEntry, OptionData, ZONE_KIND};
pub use event::{HostEvent, OptionCategories};
pub use selection::Selection;
