//! Registry allocation data.
//!
//! A registry lookup answers with a network object that carries either an
//! explicit list of `(prefix, length)` entries or a `startAddress`/`endAddress`
//! pair. This module turns that object into exactly one [`Allocation`] and
//! resolves it to CIDR strings. Fetching the object is the caller's job.

use crate::decompose::{decompose_blocks, normalize_blocks};
use crate::error::{DecomposeResult, RegistryError, RegistryResult};
use crate::types::CidrBlock;
use serde::de::Error as _;
use serde::Deserialize;

/// A registry network object, as returned by an RDAP-style `ip` query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// Registry handle of the allocation.
    #[serde(default)]
    pub handle: Option<String>,
    /// First address of the allocation.
    #[serde(default)]
    pub start_address: Option<String>,
    /// Last address of the allocation.
    #[serde(default)]
    pub end_address: Option<String>,
    /// Explicit prefix list, when the registry publishes one.
    #[serde(default, rename = "cidr0_cidrs")]
    pub cidrs: Vec<PrefixEntry>,
}

/// One `(prefix, length)` entry of a registry CIDR list.
#[derive(Debug, Clone, Deserialize)]
pub struct PrefixEntry {
    #[serde(default)]
    pub v4prefix: Option<String>,
    #[serde(default)]
    pub v6prefix: Option<String>,
    pub length: u8,
}

impl PrefixEntry {
    fn to_cidr(&self, index: usize) -> RegistryResult<String> {
        match (&self.v4prefix, &self.v6prefix) {
            (Some(prefix), None) | (None, Some(prefix)) => {
                Ok(format!("{}/{}", prefix.trim(), self.length))
            }
            (None, None) => Err(RegistryError::InvalidEntry {
                index,
                reason: "no v4prefix or v6prefix".to_string(),
            }),
            (Some(_), Some(_)) => Err(RegistryError::InvalidEntry {
                index,
                reason: "both v4prefix and v6prefix are set".to_string(),
            }),
        }
    }
}

/// The shape of allocation data handed to the decomposition core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// Already split `address/length` strings.
    Prefixes(Vec<String>),
    /// An inclusive address range to decompose.
    Range { start: String, end: String },
}

impl NetworkRecord {
    /// Parse a network object from a JSON document.
    ///
    /// The document must be a JSON object; arrays are not read by position.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(RegistryError::InvalidFormat(serde_json::Error::custom(
                "expected a network object",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Select the allocation shape, preferring an explicit prefix list.
    pub fn allocation(&self) -> RegistryResult<Allocation> {
        if !self.cidrs.is_empty() {
            let prefixes = self
                .cidrs
                .iter()
                .enumerate()
                .map(|(i, entry)| entry.to_cidr(i))
                .collect::<RegistryResult<Vec<_>>>()?;
            return Ok(Allocation::Prefixes(prefixes));
        }

        match (&self.start_address, &self.end_address) {
            (Some(start), Some(end)) => Ok(Allocation::Range {
                start: start.clone(),
                end: end.clone(),
            }),
            _ => Err(RegistryError::NoAllocation),
        }
    }
}

/// Resolve an allocation into typed CIDR blocks.
pub fn resolve_blocks(allocation: &Allocation) -> DecomposeResult<Vec<CidrBlock>> {
    match allocation {
        Allocation::Prefixes(prefixes) => normalize_blocks(prefixes),
        Allocation::Range { start, end } => decompose_blocks(start, end),
    }
}

/// Resolve an allocation into canonical CIDR strings.
pub fn resolve(allocation: &Allocation) -> DecomposeResult<Vec<String>> {
    Ok(resolve_blocks(allocation)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Blocks resolved from a registry document.
#[derive(Debug)]
pub struct Resolution {
    pub blocks: Vec<CidrBlock>,
    /// Failure that was replaced by an empty block list.
    pub degraded: Option<RegistryError>,
}

/// Parse a registry JSON document and resolve its allocation.
pub fn resolve_document(json: &str) -> RegistryResult<Vec<CidrBlock>> {
    let record = NetworkRecord::from_json(json)?;
    let allocation = record.allocation()?;
    if let Some(handle) = &record.handle {
        tracing::debug!(%handle, ?allocation, "resolving allocation");
    }
    Ok(resolve_blocks(&allocation)?)
}

/// Resolve a registry JSON document, optionally degrading failures.
///
/// With `empty_on_error` set, any failure is logged and reported through
/// [`Resolution::degraded`] with an empty block list. Otherwise it is returned.
pub fn resolve_with_policy(json: &str, empty_on_error: bool) -> RegistryResult<Resolution> {
    match resolve_document(json) {
        Ok(blocks) => Ok(Resolution {
            blocks,
            degraded: None,
        }),
        Err(err) if empty_on_error => {
            tracing::warn!(error = %err, "registry data unusable, returning no blocks");
            Ok(Resolution {
                blocks: Vec::new(),
                degraded: Some(err),
            })
        }
        Err(err) => Err(err),
    }
}

/// Resolve a registry JSON document, degrading every failure to an empty list.
///
/// This is the end-user policy for lookups where "no usable data" and
/// "malformed data" are presented the same way. The failure is still logged.
pub fn resolve_or_empty(json: &str) -> Vec<String> {
    resolve_with_policy(json, true)
        .map(|resolution| resolution.blocks)
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect()
}
