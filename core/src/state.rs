//! Menu state and transitions.
//!
//! All state lives in a single in-memory session scope. Every inbound host
//! event first replaces the option and zone lists wholesale; nothing is
//! merged incrementally and nothing outlives a visibility session.

use ocular_types::{HostEvent, MenuEntry, OptionCategories, OptionData, ZONE_KIND};

/// Neutral color used until the host reports its theme color.
pub const DEFAULT_COLOR: &str = "#cfd2da";

/// The overlay controller's state container.
///
/// Updated only through [`MenuState::apply`] (inbound events) and the group
/// navigation methods (user actions).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    /// Whether the overlay frame is shown at all.
    pub visible: bool,
    /// Whether the reticle currently rests on a target.
    pub eye_hover: bool,
    /// Flattened options from the last target event.
    pub options: Vec<MenuEntry>,
    /// Flattened zone entries from the last target event.
    pub zones: Vec<MenuEntry>,
    /// Distinct group labels, in first-appearance order.
    pub parent_groups: Vec<String>,
    /// Group the player navigated into, if any.
    pub selected_group: Option<String>,
    /// Theme color; replaced once by the startup fetch.
    pub main_color: String,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            visible: false,
            eye_hover: false,
            options: Vec::new(),
            zones: Vec::new(),
            parent_groups: Vec::new(),
            selected_group: None,
            main_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one inbound host event.
    pub fn apply(&mut self, event: HostEvent) {
        // Every inbound message replaces the target lists wholesale; stale
        // entries never persist across events.
        self.options.clear();
        self.zones.clear();

        match event {
            HostEvent::Visible { state } => {
                self.visible = state;
                self.reset_target();
            }
            HostEvent::LeftTarget => {
                self.reset_target();
            }
            HostEvent::SetTarget { options, zones } => {
                self.eye_hover = true;

                if let Some(categories) = options {
                    let (entries, groups) = flatten_categories(categories);
                    self.options = entries;
                    self.parent_groups = groups;
                    // A selection into a group that no longer exists would
                    // dangle; clear it.
                    if let Some(selected) = &self.selected_group
                        && !self.parent_groups.iter().any(|g| g == selected)
                    {
                        self.selected_group = None;
                    }
                }

                if let Some(zones) = zones {
                    self.zones = flatten_zones(zones);
                }
            }
        }
    }

    /// Navigate into a group sub-menu.
    pub fn enter_group(&mut self, group: impl Into<String>) {
        self.selected_group = Some(group.into());
    }

    /// Navigate back out of the current group sub-menu.
    pub fn leave_group(&mut self) {
        self.selected_group = None;
    }

    pub fn set_main_color(&mut self, color: impl Into<String>) {
        self.main_color = color.into();
    }

    fn reset_target(&mut self) {
        self.eye_hover = false;
        self.selected_group = None;
        self.parent_groups.clear();
    }
}

/// Flatten the ordered category mapping into positioned entries and collect
/// the distinct group labels in first-appearance order.
///
/// Ids are 1-based within each category, in the host's per-category order.
/// Hidden or group-less records contribute nothing to the group list but
/// still occupy an id slot.
fn flatten_categories(categories: OptionCategories) -> (Vec<MenuEntry>, Vec<String>) {
    let mut entries = Vec::new();
    let mut groups: Vec<String> = Vec::new();

    for (kind, records) in categories.0 {
        for (index, data) in records.into_iter().enumerate() {
            if let Some(group) = data.visible_group()
                && !groups.iter().any(|g| g == group)
            {
                groups.push(group.to_string());
            }
            entries.push(MenuEntry {
                kind: kind.clone(),
                data,
                id: index as u32 + 1,
                zone_id: None,
            });
        }
    }

    (entries, groups)
}

/// Flatten the per-zone option lists: `zone_id` is the 1-based outer index,
/// `id` the 1-based position within the zone.
fn flatten_zones(zones: Vec<Vec<OptionData>>) -> Vec<MenuEntry> {
    zones
        .into_iter()
        .enumerate()
        .flat_map(|(zone_index, records)| {
            records.into_iter().enumerate().map(move |(index, data)| MenuEntry {
                kind: ZONE_KIND.to_string(),
                data,
                id: index as u32 + 1,
                zone_id: Some(zone_index as u32 + 1),
            })
        })
        .collect()
}
