//! Portal repository and per-cell grouping.
//!
//! Holds classified map points (portals) keyed by GUID and buckets them
//! into grid cells at a chosen level. The store is an explicit value
//! passed by reference; there is no ambient registry. CRUD operations
//! return `Result` so callers see unknown-GUID and duplicate-insert
//! conditions instead of silent mutation.
//!
//! Snapshots serialize the records as a flat JSON map. The geometry core
//! never reads or writes persisted state; this is the only module that
//! touches serialization.

use crate::cell::Cell;
use crate::error::{CellGridError, Result};
use crate::geometry::LatLng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A map point identified by GUID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    /// Stable unique id assigned by the upstream map source.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Location.
    pub latlng: LatLng,
}

impl Portal {
    /// Create a new portal.
    pub fn new(guid: impl Into<String>, name: impl Into<String>, latlng: LatLng) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            latlng,
        }
    }
}

/// How a portal counts toward per-cell aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Counts as a gym.
    Gym,
    /// Counts as a stop.
    Stop,
    /// Known portal, not yet classified.
    Unclassified,
    /// Confirmed absent from the game; occupies its cell but counts as
    /// nothing.
    NotPogo,
}

/// A portal together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalRecord {
    pub portal: Portal,
    pub classification: Classification,
}

/// Portals grouped into one cell.
///
/// `NotPogo` portals create the group but appear in no bucket.
#[derive(Debug)]
pub struct CellGroup<'a> {
    /// The cell all grouped portals fall in.
    pub cell: Cell,
    pub gyms: Vec<&'a Portal>,
    pub stops: Vec<&'a Portal>,
    pub unclassified: Vec<&'a Portal>,
}

impl CellGroup<'_> {
    /// Total portals counted in this cell (excludes `NotPogo`).
    pub fn len(&self) -> usize {
        self.gyms.len() + self.stops.len() + self.unclassified.len()
    }

    /// Check whether the group counts no portals.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Repository of classified portals keyed by GUID.
#[derive(Debug, Default)]
pub struct PortalStore {
    records: FxHashMap<String, PortalRecord>,
}

impl PortalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a portal with a classification.
    ///
    /// Fails with [`CellGridError::DuplicatePortal`] if the GUID is
    /// already present; use [`classify`](Self::classify) to change an
    /// existing record.
    pub fn insert(&mut self, portal: Portal, classification: Classification) -> Result<()> {
        if self.records.contains_key(&portal.guid) {
            return Err(CellGridError::DuplicatePortal { guid: portal.guid });
        }
        tracing::trace!(guid = %portal.guid, ?classification, "insert portal");
        self.records.insert(
            portal.guid.clone(),
            PortalRecord {
                portal,
                classification,
            },
        );
        Ok(())
    }

    /// Change the classification of an existing portal.
    pub fn classify(&mut self, guid: &str, classification: Classification) -> Result<()> {
        let record = self
            .records
            .get_mut(guid)
            .ok_or_else(|| CellGridError::PortalNotFound {
                guid: guid.to_string(),
            })?;
        record.classification = classification;
        Ok(())
    }

    /// Remove a portal, returning it.
    pub fn remove(&mut self, guid: &str) -> Result<Portal> {
        self.records
            .remove(guid)
            .map(|record| record.portal)
            .ok_or_else(|| CellGridError::PortalNotFound {
                guid: guid.to_string(),
            })
    }

    /// Look up a record by GUID.
    pub fn get(&self, guid: &str) -> Option<&PortalRecord> {
        self.records.get(guid)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PortalRecord> {
        self.records.values()
    }

    /// Bucket all portals into cells at the given level.
    ///
    /// Keys are the cells' canonical string keys. Every portal creates
    /// its cell's group; `NotPogo` portals are counted in no bucket, so
    /// a cell holding only those comes back as an empty group.
    pub fn group_by_cell(&self, level: u8) -> FxHashMap<String, CellGroup<'_>> {
        let mut groups: FxHashMap<String, CellGroup<'_>> = FxHashMap::default();

        for record in self.records.values() {
            let cell = Cell::from_latlng(record.portal.latlng, level);
            let group = groups.entry(cell.key()).or_insert_with(|| CellGroup {
                cell,
                gyms: Vec::new(),
                stops: Vec::new(),
                unclassified: Vec::new(),
            });

            match record.classification {
                Classification::Gym => group.gyms.push(&record.portal),
                Classification::Stop => group.stops.push(&record.portal),
                Classification::Unclassified => group.unclassified.push(&record.portal),
                Classification::NotPogo => {}
            }
        }

        groups
    }

    /// Serialize all records to a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        tracing::debug!(records = self.records.len(), "export snapshot");
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Rebuild a store from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: FxHashMap<String, PortalRecord> = serde_json::from_str(json)?;
        tracing::debug!(records = records.len(), "import snapshot");
        Ok(Self { records })
    }
}
