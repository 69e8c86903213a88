//! Paint state: one independent partition of placed cells per tiling kind.
//!
//! [`PlacementStore::toggle`] implements the painting rule. Clicking a cell with its
//! current color erases it, and clicking with any other color repaints it. Switching the
//! active tiling kind never touches another kind's partition.
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tiling::{CellKey, LogicalAddress, TilingKind};

/// Opaque color value, compared by exact string equality (e.g. `#ffcc00`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `#rgb` or `#rrggbb` into RGB bytes. Other formats yield `None`.
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        let hex = self.0.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (out, i) in rgb.iter_mut().zip(0..3) {
                    let v = channel(&hex[i..i + 1])?;
                    *out = v * 17;
                }
                Some(rgb)
            }
            6 => Some([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ]),
            _ => None,
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A painted cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedCell {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TilingKind,
    pub color: Color,
}

impl PlacedCell {
    pub fn new(kind: TilingKind, color: impl Into<Color>) -> Self {
        Self {
            kind,
            color: color.into(),
        }
    }
}

/// Placed cells of one tiling kind, keyed by cell.
pub type Partition = BTreeMap<CellKey, PlacedCell>;

/// What a [`PlacementStore::toggle`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The cell was empty and is now painted.
    Painted,
    /// The cell had a different color and was repainted.
    Recolored,
    /// The cell had the same color and was erased.
    Erased,
}

/// Full copy of every partition, used for persistence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementSnapshot {
    pub partitions: BTreeMap<TilingKind, Partition>,
}

impl PlacementSnapshot {
    /// Number of placed cells across all partitions.
    pub fn total_cells(&self) -> usize {
        self.partitions.values().map(BTreeMap::len).sum()
    }
}

/// Per-kind paint partitions. All four partitions always exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementStore {
    partitions: BTreeMap<TilingKind, Partition>,
}

impl PlacementStore {
    /// Creates a store with an empty partition for every kind.
    pub fn new() -> Self {
        Self {
            partitions: TilingKind::ALL
                .into_iter()
                .map(|kind| (kind, Partition::new()))
                .collect(),
        }
    }

    fn partition_mut(&mut self, kind: TilingKind) -> &mut Partition {
        self.partitions.entry(kind).or_default()
    }

    /// Erases the cell if it already has `color`, otherwise paints it with `color`.
    pub fn toggle(
        &mut self,
        kind: TilingKind,
        address: &LogicalAddress,
        color: impl Into<Color>,
    ) -> ToggleOutcome {
        let color = color.into();
        let key = address.key();
        let partition = self.partition_mut(kind);

        let same_color = partition.get(&key).map(|existing| existing.color == color);
        let outcome = match same_color {
            Some(true) => {
                partition.remove(&key);
                ToggleOutcome::Erased
            }
            Some(false) => {
                partition.insert(key.clone(), PlacedCell { kind, color });
                ToggleOutcome::Recolored
            }
            None => {
                partition.insert(key.clone(), PlacedCell { kind, color });
                ToggleOutcome::Painted
            }
        };

        debug!(%kind, cell = %key, ?outcome, "toggled cell");
        outcome
    }

    /// Empties the partition of `kind`, leaving all others untouched.
    pub fn clear(&mut self, kind: TilingKind) {
        self.partition_mut(kind).clear();
    }

    /// Looks up the placed cell at `address`; `None` means unpainted.
    pub fn get(&self, kind: TilingKind, address: &LogicalAddress) -> Option<&PlacedCell> {
        self.get_by_key(kind, &address.key())
    }

    pub fn get_by_key(&self, kind: TilingKind, key: &CellKey) -> Option<&PlacedCell> {
        self.partitions.get(&kind)?.get(key)
    }

    /// Read access to one partition.
    pub fn partition(&self, kind: TilingKind) -> &Partition {
        static EMPTY: Partition = BTreeMap::new();
        self.partitions.get(&kind).unwrap_or(&EMPTY)
    }

    /// Number of placed cells in the partition of `kind`.
    pub fn len(&self, kind: TilingKind) -> usize {
        self.partition(kind).len()
    }

    /// Returns `true` if no partition has any placed cell.
    pub fn is_empty(&self) -> bool {
        self.partitions.values().all(BTreeMap::is_empty)
    }

    /// Copies every partition.
    pub fn snapshot(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            partitions: self.partitions.clone(),
        }
    }

    /// Replaces all partitions at once. Kinds missing from `snapshot` become empty.
    pub fn restore(&mut self, snapshot: PlacementSnapshot) {
        let mut partitions = snapshot.partitions;
        for kind in TilingKind::ALL {
            partitions.entry(kind).or_default();
        }
        self.partitions = partitions;
    }
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PlacementSnapshot> for PlacementStore {
    fn from(snapshot: PlacementSnapshot) -> Self {
        let mut store = Self::new();
        store.restore(snapshot);
        store
    }
}
