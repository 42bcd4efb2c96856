//! Shared registries for the NiceHash hashpower marketplace API
//!
//! The API identifies algorithms, regions and order types by small integer
//! codes. This crate holds those tables and the lookups between codes and
//! canonical names. It has no I/O and can be used on its own.
//!
//! # Key Types
//!
//! - [`Algorithm`] - Hashing algorithm (codes 0-30)
//! - [`Location`] - Marketplace region (Europe / USA)
//! - [`OrderType`] - Standard or fixed-price order
//! - [`algorithm_name`], [`algorithm_code`] - Code/name lookups
//!
//! # Example
//!
//! ```
//! use nicehash_types::{algorithm_code, algorithm_name, Algorithm};
//!
//! assert_eq!(algorithm_name(3), Some("x11"));
//! assert_eq!(algorithm_code("x11"), Some(Algorithm::X11.code()));
//! assert_eq!(algorithm_name(123), None);
//! ```

mod table;

pub mod enums;
pub mod error;

pub use enums::*;
pub use error::*;
