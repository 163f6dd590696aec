//! Range to CIDR decomposition.
//!
//! Walks an inclusive address range from its start, emitting at each position
//! the largest block that is both aligned at that position and does not run
//! past the end of the range. The result is the minimal exact cover.

use crate::error::DecomposeResult;
use crate::types::{Address, AddressRange, CidrBlock};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Lazy iterator over the minimal CIDR cover of an [`AddressRange`].
///
/// Blocks are yielded in ascending order of base address.
#[derive(Debug, Clone)]
pub struct Decomposition {
    next: Option<Address>,
    end: Address,
}

impl Decomposition {
    pub fn new(range: AddressRange) -> Self {
        Self {
            next: Some(range.start()),
            end: range.end(),
        }
    }
}

impl Iterator for Decomposition {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take()?;
        let bits = cur.family().bit_width();

        // `end - cur` is the span minus one, which keeps 2^128 out of the math
        let span_minus_one = self.end.offset_from(cur)?;
        let host_bits = cur.trailing_zeros().min(floor_log2_span(span_minus_one));

        let block = CidrBlock::new_unchecked(cur, (bits - host_bits) as u8);
        tracing::trace!(%block, "emit block");

        // Stops at the end of the range, and at the top of the address space
        // instead of wrapping around.
        self.next = block
            .last()
            .checked_add(1)
            .ok()
            .filter(|next| *next <= self.end);

        Some(block)
    }
}

impl FusedIterator for Decomposition {}

/// `floor(log2(span_minus_one + 1))`, defined for the full 128-bit span.
fn floor_log2_span(span_minus_one: u128) -> u32 {
    match span_minus_one.checked_add(1) {
        Some(span) => u128::BITS - 1 - span.leading_zeros(),
        None => u128::BITS,
    }
}

/// Decompose a validated range into its minimal list of CIDR blocks.
pub fn decompose(range: &AddressRange) -> Vec<CidrBlock> {
    range.blocks().collect()
}

/// Parse a start/end pair and decompose it into typed blocks.
pub fn decompose_blocks(start: &str, end: &str) -> DecomposeResult<Vec<CidrBlock>> {
    let range = AddressRange::parse(start, end)?;
    let blocks = decompose(&range);
    tracing::debug!(%range, blocks = blocks.len(), "decomposed range");
    Ok(blocks)
}

/// Decompose `start..=end` into canonical `address/prefix_length` strings.
///
/// # Examples
/// ```
/// use ipspan::decompose_range;
/// assert_eq!(
///     decompose_range("10.0.0.4", "10.0.0.11").unwrap(),
///     vec!["10.0.0.4/30", "10.0.0.8/30"]
/// );
/// ```
pub fn decompose_range(start: &str, end: &str) -> DecomposeResult<Vec<String>> {
    Ok(decompose_blocks(start, end)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Validate explicit `address/prefix_length` entries and drop duplicates.
///
/// Entries are canonicalized before comparison, so `2001:0db8::/32` and
/// `2001:db8::/32` count as the same block. First-seen order is preserved.
/// The first invalid entry aborts with its error.
pub fn normalize_blocks<I, S>(entries: I) -> DecomposeResult<Vec<CidrBlock>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for entry in entries {
        let block: CidrBlock = entry.as_ref().parse()?;
        if seen.insert(block) {
            normalized.push(block);
        } else {
            tracing::debug!(%block, "dropping duplicate block");
        }
    }

    Ok(normalized)
}

/// String form of [`normalize_blocks`].
pub fn normalize_cidrs<I, S>(entries: I) -> DecomposeResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(normalize_blocks(entries)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
