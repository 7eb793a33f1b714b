//! Parties of a protocol run.
//!
//! A run is sized by the protocol's scale parameter `l`: every unit of
//! scale contributes [`PARTIES_PER_SCALE`] parties. Parties are numbered
//! contiguously from zero.

use crate::core::error::DomainError;
use std::fmt;

/// Parties contributed by one unit of the scale parameter
pub const PARTIES_PER_SCALE: u32 = 4;

/// Index of a single party (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartyId(u32);

impl PartyId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PartyId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Total number of parties in a run (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyCount(u32);

impl PartyCount {
    /// Size a run from the protocol scale parameter.
    ///
    /// Fails when `scale * PARTIES_PER_SCALE` does not fit in a `u32`.
    pub fn from_scale(scale: u64) -> Result<Self, DomainError> {
        u32::try_from(scale)
            .ok()
            .and_then(|s| s.checked_mul(PARTIES_PER_SCALE))
            .map(Self)
            .ok_or(DomainError::PartyCountOverflow(scale))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Every party id of the run, in increasing order
    pub fn ids(&self) -> impl Iterator<Item = PartyId> + use<> {
        (0..self.0).map(PartyId)
    }
}

impl fmt::Display for PartyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
