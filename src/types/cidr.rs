//! CIDR block type.
//!
//! A [`CidrBlock`] can only be constructed with its base aligned to the block
//! size, so every value of this type is a legal `base/prefix_length` entry.

use super::address::{Address, AddressError, Family};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Error type for CIDR block construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    #[error("missing prefix length in {0:?} (expected <address>/<length>)")]
    MissingPrefixLength(String),
    #[error("invalid prefix length: {0:?}")]
    InvalidPrefixLength(String),
    #[error("prefix length /{prefix_len} is too long for {family}")]
    PrefixTooLong { prefix_len: u32, family: Family },
    #[error("{base}/{prefix_len} has host bits set")]
    HostBitsSet { base: Address, prefix_len: u8 },
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// A power-of-two aligned block of addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CidrBlock {
    base: Address,
    prefix_len: u8,
}

impl CidrBlock {
    /// Create a block, checking the prefix length and alignment.
    pub fn new(base: Address, prefix_len: u8) -> Result<Self, CidrError> {
        let family = base.family();
        if u32::from(prefix_len) > family.bit_width() {
            return Err(CidrError::PrefixTooLong {
                prefix_len: prefix_len.into(),
                family,
            });
        }

        let block = Self { base, prefix_len };
        if base.value() & block.host_mask() != 0 {
            return Err(CidrError::HostBitsSet { base, prefix_len });
        }
        Ok(block)
    }

    /// Build a block whose validity the caller has already established.
    pub(crate) const fn new_unchecked(base: Address, prefix_len: u8) -> Self {
        Self { base, prefix_len }
    }

    /// First address of the block.
    #[inline]
    pub const fn base(&self) -> Address {
        self.base
    }

    #[inline]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    #[inline]
    pub const fn family(&self) -> Family {
        self.base.family()
    }

    /// Number of host bits (`bits - prefix_len`).
    #[inline]
    pub const fn host_bits(&self) -> u32 {
        self.base.family().bit_width() - self.prefix_len as u32
    }

    /// Mask selecting the host bits of an address in this block.
    pub const fn host_mask(&self) -> u128 {
        let host_bits = self.host_bits();
        if host_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        }
    }

    /// Number of addresses in the block.
    ///
    /// Returns `None` for `::/0`, whose 2^128 addresses do not fit in a `u128`.
    pub const fn size(&self) -> Option<u128> {
        let host_bits = self.host_bits();
        if host_bits >= 128 {
            None
        } else {
            Some(1u128 << host_bits)
        }
    }

    /// Last address of the block.
    pub fn last(&self) -> Address {
        // The value stays within the family: base is aligned and the mask only
        // covers host bits.
        match Address::new(self.family(), self.base.value() | self.host_mask()) {
            Ok(addr) => addr,
            Err(_) => self.family().max(),
        }
    }

    /// Check whether `addr` falls inside this block.
    pub fn contains(&self, addr: Address) -> bool {
        addr.family() == self.family() && addr >= self.base && addr <= self.last()
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| CidrError::MissingPrefixLength(s.to_string()))?;

        // No whitespace around the slash, as with the address itself
        if addr.ends_with(char::is_whitespace) {
            return Err(AddressError::Malformed(addr.to_string()).into());
        }
        let base = Address::parse(addr)?;

        // Digits only, without leading zeros (`/08` is rejected like `01.2.3.4`)
        if len.is_empty()
            || !len.bytes().all(|b| b.is_ascii_digit())
            || (len.len() > 1 && len.starts_with('0'))
        {
            return Err(CidrError::InvalidPrefixLength(len.to_string()));
        }
        let prefix_len: u32 = len
            .parse()
            .map_err(|_| CidrError::InvalidPrefixLength(len.to_string()))?;
        let prefix_len = u8::try_from(prefix_len).map_err(|_| CidrError::PrefixTooLong {
            prefix_len,
            family: base.family(),
        })?;

        Self::new(base, prefix_len)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl TryFrom<CidrBlock> for ipnetwork::IpNetwork {
    type Error = ipnetwork::IpNetworkError;

    fn try_from(block: CidrBlock) -> Result<Self, Self::Error> {
        ipnetwork::IpNetwork::new(block.base.into(), block.prefix_len)
    }
}
