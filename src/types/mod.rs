//! Core value types for address arithmetic.
//!
//! Every type here is an immutable `Copy` value whose constructor enforces its
//! invariants, so a range or block that exists is always a legal one.

mod address;
mod cidr;
mod range;

pub use address::{Address, AddressError, Family};
pub use cidr::{CidrBlock, CidrError};
pub use range::AddressRange;
