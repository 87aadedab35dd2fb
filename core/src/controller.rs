//! The overlay controller.
//!
//! Composes the state store, the activation gate, and the selection sink.
//! Inbound host events flow through [`MenuController::handle_event`]; card
//! activations (the user's pointer) flow through [`MenuController::activate`].

use std::time::{Duration, Instant};

use ocular_types::HostEvent;

use crate::callback::SelectionSink;
use crate::cooldown::{ActivationGate, CardKey};
use crate::render::{render, CardAction, MenuFrame};
use crate::state::MenuState;

pub struct MenuController<S: SelectionSink> {
    state: MenuState,
    gate: ActivationGate,
    sink: S,
}

impl<S: SelectionSink> MenuController<S> {
    pub fn new(sink: S, cooldown: Duration) -> Self {
        Self {
            state: MenuState::new(),
            gate: ActivationGate::new(cooldown),
            sink,
        }
    }

    /// Feed one decoded host event into the state store.
    pub fn handle_event(&mut self, event: HostEvent) {
        self.state.apply(event);
    }

    /// Apply the startup theme-color fetch result.
    pub fn set_main_color(&mut self, color: impl Into<String>) {
        self.state.set_main_color(color);
    }

    /// Derive the current renderable frame.
    pub fn frame(&self) -> Option<MenuFrame> {
        render(&self.state)
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Activate a card. Navigation actions mutate local state; selections go
    /// out through the sink, at most once per cooldown window per card.
    pub fn activate(&mut self, action: &CardAction, now: Instant) {
        if !self.gate.try_activate(CardKey::from(action), now) {
            return;
        }
        match action {
            CardAction::Back => self.state.leave_group(),
            CardAction::OpenGroup(group) => self.state.enter_group(group.clone()),
            CardAction::Select(selection) => self.sink.send_select(selection.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::cooldown::DEFAULT_WINDOW;
    use ocular_types::{OptionCategories, OptionData, Selection};

    /// Captures outbound selections instead of posting them.
    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<Selection>>>);

    impl SelectionSink for RecordingSink {
        fn send_select(&self, selection: Selection) {
            self.0.lock().unwrap().push(selection);
        }
    }

    fn controller() -> (MenuController<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        (MenuController::new(sink.clone(), DEFAULT_WINDOW), sink)
    }

    fn single_option_target() -> HostEvent {
        HostEvent::SetTarget {
            options: Some(OptionCategories(vec![(
                "menu".to_string(),
                vec![OptionData {
                    label: "Open".to_string(),
                    icon: "fa-door".to_string(),
                    ..Default::default()
                }],
            )])),
            zones: None,
        }
    }

    #[test]
    fn test_activating_a_card_emits_exactly_one_selection() {
        let (mut controller, sink) = controller();
        controller.handle_event(HostEvent::Visible { state: true });
        controller.handle_event(single_option_target());

        let frame = controller.frame().unwrap();
        controller.activate(&frame.cards[0].action, Instant::now());

        let sent = sink.0.lock().unwrap();
        assert_eq!(*sent, [Selection::option("menu", 1)]);
    }

    #[test]
    fn test_double_click_inside_window_emits_once() {
        let (mut controller, sink) = controller();
        controller.handle_event(HostEvent::Visible { state: true });
        controller.handle_event(single_option_target());

        let action = controller.frame().unwrap().cards[0].action.clone();
        let start = Instant::now();
        controller.activate(&action, start);
        controller.activate(&action, start + Duration::from_millis(30));
        assert_eq!(sink.0.lock().unwrap().len(), 1);

        controller.activate(&action, start + DEFAULT_WINDOW);
        assert_eq!(sink.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_group_navigation_emits_no_selection() {
        let (mut controller, sink) = controller();
        controller.handle_event(HostEvent::Visible { state: true });
        controller.handle_event(HostEvent::SetTarget {
            options: Some(OptionCategories(vec![(
                "door".to_string(),
                vec![OptionData {
                    label: "Lock".to_string(),
                    icon: "fa-lock".to_string(),
                    parent_group: Some("Doors".to_string()),
                    ..Default::default()
                }],
            )])),
            zones: None,
        });

        let open = controller.frame().unwrap().cards[0].action.clone();
        assert_eq!(open, CardAction::OpenGroup("Doors".to_string()));
        controller.activate(&open, Instant::now());
        assert_eq!(controller.state().selected_group.as_deref(), Some("Doors"));

        let back = controller.frame().unwrap().cards[0].action.clone();
        assert_eq!(back, CardAction::Back);
        controller.activate(&back, Instant::now());
        assert_eq!(controller.state().selected_group, None);

        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_hiding_the_overlay_blanks_the_frame() {
        let (mut controller, _sink) = controller();
        controller.handle_event(HostEvent::Visible { state: true });
        controller.handle_event(single_option_target());
        assert!(controller.frame().is_some());

        controller.handle_event(HostEvent::Visible { state: false });
        assert_eq!(controller.frame(), None);
    }
}
