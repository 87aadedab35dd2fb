//! Per-card activation cooldown.
//!
//! After a card activates, the same card refuses further activation for a
//! fixed window, then re-enables on its own. This replaces the original
//! resource's trick of toggling pointer events on the DOM node; duplicate
//! submissions from one pointer gesture must not reach the host twice.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::render::CardAction;

/// Default cooldown window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

/// Identity of a card for cooldown purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardKey {
    Back,
    Group(String),
    Entry { kind: String, id: u32, zone_id: Option<u32> },
}

impl From<&CardAction> for CardKey {
    fn from(action: &CardAction) -> Self {
        match action {
            CardAction::Back => CardKey::Back,
            CardAction::OpenGroup(group) => CardKey::Group(group.clone()),
            CardAction::Select(selection) => CardKey::Entry {
                kind: selection.kind.clone(),
                id: selection.id,
                zone_id: selection.zone_id,
            },
        }
    }
}

/// Tracks the last activation instant per card.
///
/// The clock is supplied by the caller so tests control time.
#[derive(Debug)]
pub struct ActivationGate {
    window: Duration,
    last: HashMap<CardKey, Instant>,
}

impl ActivationGate {
    pub fn new(window: Duration) -> Self {
        Self { window, last: HashMap::new() }
    }

    /// Record an activation attempt; returns false while the card is still
    /// cooling down from a previous one.
    pub fn try_activate(&mut self, key: CardKey, now: Instant) -> bool {
        match self.last.get(&key) {
            Some(&previous) if now.duration_since(previous) < self.window => false,
            _ => {
                self.last.insert(key, now);
                true
            }
        }
    }
}

impl Default for ActivationGate {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: u32) -> CardKey {
        CardKey::Entry { kind: "door".to_string(), id, zone_id: None }
    }

    #[test]
    fn test_rapid_reactivation_is_blocked() {
        let mut gate = ActivationGate::default();
        let start = Instant::now();
        assert!(gate.try_activate(key(1), start));
        assert!(!gate.try_activate(key(1), start + Duration::from_millis(50)));
    }

    #[test]
    fn test_card_reenables_after_window() {
        let mut gate = ActivationGate::default();
        let start = Instant::now();
        assert!(gate.try_activate(key(1), start));
        assert!(gate.try_activate(key(1), start + Duration::from_millis(100)));
    }

    #[test]
    fn test_cooldown_is_per_card() {
        let mut gate = ActivationGate::default();
        let start = Instant::now();
        assert!(gate.try_activate(key(1), start));
        assert!(gate.try_activate(key(2), start));
    }
}
