//! Render-model derivation.
//!
//! A stateless mapping from [`MenuState`] to the card list a renderer would
//! draw. The overlay renders nothing while hidden; while a group is selected
//! only that group's members are shown behind a single back card.

use serde::Serialize;

use ocular_types::{MenuEntry, Selection};

use crate::state::MenuState;

/// Label on the back card, as shipped by the host resource.
pub const BACK_LABEL: &str = "Retour";

const BACK_ICON: &str = "fa-solid fa-chevrons-left";
const GROUP_ICON: &str = "fa-solid fa-chevrons-right";

/// One derived frame of the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuFrame {
    pub eye_hover: bool,
    pub main_color: String,
    pub cards: Vec<Card>,
}

/// A single renderable card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub label: String,
    pub icon: String,
    /// Icon color; the record's own color when present, the theme color
    /// otherwise.
    pub color: String,
    pub action: CardAction,
}

/// What activating a card does.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardAction {
    /// Leave the selected group sub-menu.
    Back,
    /// Navigate into a group sub-menu.
    OpenGroup(String),
    /// Report a selection to the host.
    Select(Selection),
}

/// Derive the renderable frame, or `None` while the overlay is hidden.
pub fn render(state: &MenuState) -> Option<MenuFrame> {
    if !state.visible {
        return None;
    }

    let mut cards = Vec::new();

    match &state.selected_group {
        Some(_) => {
            cards.push(Card {
                label: BACK_LABEL.to_string(),
                icon: BACK_ICON.to_string(),
                color: state.main_color.clone(),
                action: CardAction::Back,
            });
        }
        None => {
            for group in &state.parent_groups {
                cards.push(Card {
                    label: group.clone(),
                    icon: GROUP_ICON.to_string(),
                    color: state.main_color.clone(),
                    action: CardAction::OpenGroup(group.clone()),
                });
            }
        }
    }

    // Ungrouped options render at the top level; group members render only
    // inside their group. Hidden records never render.
    for entry in &state.options {
        if entry.data.hide {
            continue;
        }
        if entry.data.parent_group.as_deref() != state.selected_group.as_deref() {
            continue;
        }
        cards.push(entry_card(entry, &state.main_color));
    }

    // Zones render only at the top level; inside a group the menu shows the
    // back card and the group's members alone.
    if state.selected_group.is_none() {
        for zone in state.zones.iter().filter(|z| !z.data.hide) {
            cards.push(entry_card(zone, &state.main_color));
        }
    }

    Some(MenuFrame {
        eye_hover: state.eye_hover,
        main_color: state.main_color.clone(),
        cards,
    })
}

fn entry_card(entry: &MenuEntry, main_color: &str) -> Card {
    Card {
        label: entry.data.label.clone(),
        icon: entry.data.icon.clone(),
        color: entry.data.icon_color.clone().unwrap_or_else(|| main_color.to_string()),
        action: CardAction::Select(Selection {
            kind: entry.kind.clone(),
            id: entry.id,
            zone_id: entry.zone_id,
        }),
    }
}
