//! Inclusive address ranges.

use super::address::Address;
use crate::decompose::Decomposition;
use crate::error::{DecomposeError, DecomposeResult};
use std::fmt;

/// An inclusive `start..=end` range of addresses in a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    /// Create a range, rejecting mixed families and reversed bounds.
    pub fn new(start: Address, end: Address) -> DecomposeResult<Self> {
        if start.family() != end.family() {
            return Err(DecomposeError::FamilyMismatch { start, end });
        }
        if start > end {
            return Err(DecomposeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from text.
    pub fn parse(start: &str, end: &str) -> DecomposeResult<Self> {
        let start = Address::parse(start)?;
        let end = Address::parse(end)?;
        Self::new(start, end)
    }

    /// A range holding exactly one address.
    pub const fn single(addr: Address) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    #[inline]
    pub const fn start(&self) -> Address {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Address {
        self.end
    }

    /// Check whether `addr` lies inside the range.
    pub fn contains(&self, addr: Address) -> bool {
        addr.family() == self.start.family() && addr >= self.start && addr <= self.end
    }

    /// Iterate over the minimal CIDR cover of this range.
    pub fn blocks(&self) -> Decomposition {
        Decomposition::new(*self)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
