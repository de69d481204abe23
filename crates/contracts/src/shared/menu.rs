//! Menu descriptor: the `menu.json` table that drives the top navigation and
//! the route table.
//!
//! The JSON is an object `key -> { path, name?, icon? }`. Key order is
//! significant (it is the order of the navigation bar and the basis of the
//! active menu index), so entries are kept in a `Vec` rather than a map.

use std::fmt;

use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Menu key of the logout action. It appears in the navigation bar but never
/// produces a route.
pub const LOGOUT_KEY: &str = "logout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub path: String,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MenuEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            icon: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDescriptor {
    entries: Vec<(String, MenuEntry)>,
}

impl MenuDescriptor {
    pub fn new(entries: Vec<(String, MenuEntry)>) -> Self {
        Self { entries }
    }

    /// Parse a descriptor from its JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse menu descriptor")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Key at position `index` in file order.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MenuDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MenuDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MenuVisitor;

        impl<'de> Visitor<'de> for MenuVisitor {
            type Value = MenuDescriptor;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping menu keys to menu entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, MenuEntry)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, entry)) = access.next_entry::<String, MenuEntry>()? {
                    // A repeated key overrides the earlier one but keeps its slot.
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(slot) => slot.1 = entry,
                        None => entries.push((key, entry)),
                    }
                }
                Ok(MenuDescriptor { entries })
            }
        }

        deserializer.deserialize_map(MenuVisitor)
    }
}
