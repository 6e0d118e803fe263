// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

use crate::geometry::Side;

/// A stable identifier for a node or edge, opaque to the core.
///
/// The host canvas picks node ids; edge ids are minted by the editor when a
/// gesture completes. The only rule enforced is that an id is a non-empty
/// path segment (no `/`), so ids can be embedded in host routes and export
/// keys without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id_segment(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Mints a sequential `{prefix}-{seq}` id.
    ///
    /// Generated values always satisfy the segment rules as long as the
    /// prefix does, which the debug assertion checks.
    pub fn generated(prefix: &str, seq: u64) -> Self {
        let value = format!("{prefix}-{seq}");
        debug_assert!(validate_id_segment(&value).is_ok());
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsSlash,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsSlash => f.write_str("id must not contain '/'"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id_segment(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('/') {
        return Err(IdError::ContainsSlash);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
pub type NodeId = Id<NodeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeIdTag {}
pub type EdgeId = Id<EdgeIdTag>;

/// Whether a handle originates connections or accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleRole {
    Source,
    Target,
}

impl HandleRole {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleRole::Source => "source",
            HandleRole::Target => "target",
        }
    }

    pub fn parse_lenient(value: &str) -> Option<HandleRole> {
        match value {
            "source" => Some(HandleRole::Source),
            "target" => Some(HandleRole::Target),
            _ => None,
        }
    }
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an attachment point, unique within its node.
///
/// Layout-generated ids follow `{side}-{role}-{pair_index}` and can be parsed
/// back into their parts; ids from other origins are carried opaquely and
/// simply fail to parse. Backed by [`SmolStr`] because handle ids are
/// re-derived in bulk on every render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(SmolStr);

impl HandleId {
    pub fn new(side: Side, role: HandleRole, pair_index: u32) -> Self {
        Self(SmolStr::new(format!("{side}-{role}-{pair_index}")))
    }

    pub fn from_raw(value: impl Into<SmolStr>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a layout-generated id into `(side, role, pair_index)`.
    pub fn parse(&self) -> Option<(Side, HandleRole, u32)> {
        let mut parts = self.0.splitn(3, '-');
        let side = Side::parse_lenient(parts.next()?)?;
        let role = HandleRole::parse_lenient(parts.next()?)?;
        let pair_index = parts.next()?.parse().ok()?;
        Some((side, role, pair_index))
    }

    pub fn side(&self) -> Option<Side> {
        self.parse().map(|(side, _, _)| side)
    }

    pub fn role(&self) -> Option<HandleRole> {
        self.parse().map(|(_, role, _)| role)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HandleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
