//! Address family and address value types.
//!
//! An [`Address`] is an unsigned integer tagged with its [`Family`], so that
//! range arithmetic works the same way for 32-bit and 128-bit addresses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// IPv4, 32-bit address space.
    V4,
    /// IPv6, 128-bit address space.
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    #[inline]
    pub const fn bit_width(self) -> u32 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Highest integer value an address of this family can hold.
    #[inline]
    pub const fn max_value(self) -> u128 {
        match self {
            Self::V4 => u32::MAX as u128,
            Self::V6 => u128::MAX,
        }
    }

    /// Highest address of this family.
    pub const fn max(self) -> Address {
        Address {
            family: self,
            value: self.max_value(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Error type for address parsing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid address: {0:?}")]
    Malformed(String),
    #[error("value {value:#x} is outside the {family} address space")]
    OutOfDomain { family: Family, value: u128 },
    #[error("{family} address arithmetic overflowed")]
    Overflow { family: Family },
    #[error("{family} address arithmetic underflowed")]
    Underflow { family: Family },
}

/// An IPv4 or IPv6 address held as an integer.
///
/// Ordering compares the family first, then the value. Arithmetic is
/// checked against the family's bit width and never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    /// Create an address from a raw value, rejecting values outside the family.
    pub const fn new(family: Family, value: u128) -> Result<Self, AddressError> {
        if value > family.max_value() {
            Err(AddressError::OutOfDomain { family, value })
        } else {
            Ok(Self { family, value })
        }
    }

    /// Parse dotted-quad IPv4 or colon-hex IPv6 text.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let s = s.trim();

        // A bare address only; prefixes, ports and zone ids are not addresses
        if s.contains(['/', '%']) {
            return Err(AddressError::Malformed(s.to_string()));
        }

        if s.contains(':') {
            let addr: Ipv6Addr = s
                .parse()
                .map_err(|_| AddressError::Malformed(s.to_string()))?;
            Ok(addr.into())
        } else {
            let addr: Ipv4Addr = s
                .parse()
                .map_err(|_| AddressError::Malformed(s.to_string()))?;
            Ok(addr.into())
        }
    }

    #[inline]
    pub const fn family(self) -> Family {
        self.family
    }

    /// Raw integer value of the address.
    #[inline]
    pub const fn value(self) -> u128 {
        self.value
    }

    /// Canonical textual form (same as `Display`).
    pub fn to_text(self) -> String {
        self.to_string()
    }

    /// Number of trailing zero bits, capped at the family width.
    ///
    /// The zero address counts as aligned to the whole address space.
    pub const fn trailing_zeros(self) -> u32 {
        let width = self.family.bit_width();
        if self.value == 0 {
            width
        } else if self.value.trailing_zeros() > width {
            width
        } else {
            self.value.trailing_zeros()
        }
    }

    /// Add `rhs`, failing if the result leaves the family's address space.
    pub fn checked_add(self, rhs: u128) -> Result<Self, AddressError> {
        let overflow = AddressError::Overflow {
            family: self.family,
        };
        let value = self.value.checked_add(rhs).ok_or_else(|| overflow.clone())?;
        Self::new(self.family, value).map_err(|_| overflow)
    }

    /// Subtract `rhs`, failing below the zero address.
    pub fn checked_sub(self, rhs: u128) -> Result<Self, AddressError> {
        let value = self
            .value
            .checked_sub(rhs)
            .ok_or(AddressError::Underflow {
                family: self.family,
            })?;
        Ok(Self {
            family: self.family,
            value,
        })
    }

    /// Distance from `start` up to `self`, if both share a family and `start <= self`.
    pub fn offset_from(self, start: Address) -> Option<u128> {
        if self.family != start.family {
            return None;
        }
        self.value.checked_sub(start.value)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self {
            family: Family::V4,
            value: u32::from(addr) as u128,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self {
            family: Family::V6,
            value: u128::from(addr),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr.family {
            // Always in range: V4 values are bounded by u32::MAX on construction
            Family::V4 => IpAddr::V4(Ipv4Addr::from(addr.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(addr.value)),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
