//! Country and ocean descriptor tables.
//!
//! Both tables are generated offline from the same geographic polygons
//! the identifier rasters are baked from, and shipped as JSON keyed by
//! entity id.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Descriptor for one country: ISO 3166-1 alpha-2 code, display name and
/// the centroid used to anchor its floating label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryInfo {
    pub iso: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Id-keyed country lookup.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    by_id: HashMap<u32, CountryInfo>,
}

impl CountryTable {
    /// Parses a table from JSON of the form `{"1": {"iso": "AF", ...}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let by_id: HashMap<u32, CountryInfo> = serde_json::from_str(json)?;
        Ok(Self { by_id })
    }

    /// Builds a table from explicit entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, CountryInfo)>) -> Self {
        Self {
            by_id: entries.into_iter().collect(),
        }
    }

    /// Looks up a country by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CountryInfo> {
        self.by_id.get(&id)
    }

    /// Looks up the ISO code for a country id.
    #[must_use]
    pub fn iso(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(|info| info.iso.as_str())
    }

    /// Returns whether the id denotes a known country.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of known countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Descriptor for one ocean: display name and label anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanInfo {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Id-keyed ocean lookup plus the dense slot assignment used by the
/// selection arrays. Slots follow ascending id order, so the mapping is
/// stable for a given descriptor file.
#[derive(Debug, Clone, Default)]
pub struct OceanTable {
    by_id: BTreeMap<u32, OceanInfo>,
    slots: HashMap<u32, usize>,
}

impl OceanTable {
    /// Parses a table from JSON of the form `{"10000": {"name": ...}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let by_id: BTreeMap<u32, OceanInfo> = serde_json::from_str(json)?;
        Ok(Self::from_map(by_id))
    }

    /// Builds a table from explicit entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, OceanInfo)>) -> Self {
        Self::from_map(entries.into_iter().collect())
    }

    fn from_map(by_id: BTreeMap<u32, OceanInfo>) -> Self {
        let slots = by_id
            .keys()
            .enumerate()
            .map(|(slot, &id)| (id, slot))
            .collect();
        Self { by_id, slots }
    }

    /// Looks up an ocean by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&OceanInfo> {
        self.by_id.get(&id)
    }

    /// Returns the dense selection slot for an ocean id.
    #[must_use]
    pub fn slot_of(&self, id: u32) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// A copy of the id-to-slot table, for seeding a selection set.
    #[must_use]
    pub fn slot_table(&self) -> HashMap<u32, usize> {
        self.slots.clone()
    }

    /// Number of known oceans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
