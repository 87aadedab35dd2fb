//! Inbound host events.
//!
//! The host pushes JSON payloads with an `event` discriminator over a local
//! message channel. Each variant validates its fields at decode time;
//! payloads that fail to decode are dropped by the bridge without touching
//! overlay state.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::entry::OptionData;

/// Ordered mapping from category key to its option records.
///
/// The host's key order determines on-screen order and the 1-based ids
/// assigned within each category, so a hash map would corrupt the contract.
/// A custom visitor collects entries in document order instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionCategories(pub Vec<(String, Vec<OptionData>)>);

impl OptionCategories {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[OptionData])> {
        self.0.iter().map(|(kind, records)| (kind.as_str(), records.as_slice()))
    }
}

impl<'de> Deserialize<'de> for OptionCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = OptionCategories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category key to option records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<OptionData>>()? {
                    categories.push(entry);
                }
                Ok(OptionCategories(categories))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

/// Events delivered by the host, discriminated by the `event` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    /// Show or hide the overlay frame.
    Visible { state: bool },
    /// The player's reticle left the current target.
    LeftTarget,
    /// A new target with its nearby options and/or zones.
    SetTarget {
        #[serde(default)]
        options: Option<OptionCategories>,
        #[serde(default)]
        zones: Option<Vec<Vec<OptionData>>>,
    },
}
