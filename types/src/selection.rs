//! Outbound selection payload.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// A selection reported back to the host when the player activates a card.
///
/// Serializes as the JSON array `[kind, id, zone_id]`. The host contract
/// predates this implementation: non-zone selections carry `null` in the
/// third slot rather than omitting it, so the array is always three elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub kind: String,
    pub id: u32,
    pub zone_id: Option<u32>,
}

impl Selection {
    pub fn option(kind: impl Into<String>, id: u32) -> Self {
        Self { kind: kind.into(), id, zone_id: None }
    }

    pub fn zone(kind: impl Into<String>, id: u32, zone_id: u32) -> Self {
        Self { kind: kind.into(), id, zone_id: Some(zone_id) }
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.kind)?;
        seq.serialize_element(&self.id)?;
        seq.serialize_element(&self.zone_id)?;
        seq.end()
    }
}
