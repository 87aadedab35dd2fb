//! Option records and flattened menu entries.

use serde::{Deserialize, Serialize};

/// Category key assigned to every zone entry.
pub const ZONE_KIND: &str = "zones";

/// One option record as sent by the host.
///
/// Every field defaults so partial records still decode; the host regularly
/// omits `iconColor`, `parentGroup`, and `hide`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionData {
    pub label: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
    pub hide: bool,
}

impl OptionData {
    /// True when this record declares a parent group and is not hidden,
    /// i.e. it contributes its group to the group list.
    pub fn visible_group(&self) -> Option<&str> {
        if self.hide {
            return None;
        }
        self.parent_group.as_deref()
    }
}

/// A flattened, positioned menu entry derived from a target event.
///
/// Identity is the `(kind, id, zone_id)` tuple. Ids are 1-based within the
/// entry's category (or within its zone, for zone entries). Entries are
/// recreated wholesale on every target event and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub kind: String,
    pub data: OptionData,
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<u32>,
}

impl MenuEntry {
    pub fn is_zone(&self) -> bool {
        self.zone_id.is_some()
    }
}
