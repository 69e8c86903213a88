//! Logical cell addresses and their canonical key form.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tiling::SubKind;

/// Discrete identity of one cell.
///
/// `(q, r)` are tiling-specific indices: axial for hexagons, half-width columns for
/// triangles, plain rows and columns for squares and octagons. `sub_kind` is set only
/// for octagon gap cells, which share the address of their owning octagon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LogicalAddress {
    pub q: i32,
    pub r: i32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sub_kind: Option<SubKind>,
}

impl LogicalAddress {
    /// Address of a primary cell.
    pub const fn new(q: i32, r: i32) -> Self {
        Self {
            q,
            r,
            sub_kind: None,
        }
    }

    /// Address of the diamond gap cell owned by the octagon at `(q, r)`.
    pub const fn diamond(q: i32, r: i32) -> Self {
        Self {
            q,
            r,
            sub_kind: Some(SubKind::Diamond),
        }
    }

    pub const fn is_sub_cell(&self) -> bool {
        self.sub_kind.is_some()
    }

    /// Canonical key for this address.
    pub fn key(&self) -> CellKey {
        CellKey::from(*self)
    }
}

impl From<(i32, i32)> for LogicalAddress {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)?;
        if let Some(sub) = self.sub_kind {
            write!(f, ":{sub}")?;
        }
        Ok(())
    }
}

impl FromStr for LogicalAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCellKey { key: s.to_owned() };

        let (coords, sub_kind) = match s.split_once(':') {
            Some((coords, sub)) => (coords, Some(sub.parse::<SubKind>().map_err(|_| invalid())?)),
            None => (s, None),
        };
        let (q, r) = coords.split_once(',').ok_or_else(invalid)?;
        let q = q.trim().parse::<i32>().map_err(|_| invalid())?;
        let r = r.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(Self { q, r, sub_kind })
    }
}

/// Canonical mapping key of a [`LogicalAddress`]: `"q,r"` or `"q,r:Diamond"`.
///
/// Keys are only built from an address or by parsing, which canonicalizes the
/// text. Two addresses denote the same cell iff their keys are equal.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(String);

impl CellKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key back into the address it was built from.
    pub fn address(&self) -> LogicalAddress {
        // Every CellKey holds canonical text, so this parse cannot fail.
        self.0.parse().unwrap_or(LogicalAddress::new(0, 0))
    }
}

impl From<LogicalAddress> for CellKey {
    fn from(address: LogicalAddress) -> Self {
        CellKey(address.to_string())
    }
}

impl From<&LogicalAddress> for CellKey {
    fn from(address: &LogicalAddress) -> Self {
        CellKey::from(*address)
    }
}

impl FromStr for CellKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<LogicalAddress>().map(CellKey::from)
    }
}

impl TryFrom<String> for CellKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CellKey> for String {
    fn from(key: CellKey) -> Self {
        key.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
