//! # textcodex
//!
//! A high-performance transcoder between Latin-1, UTF-8, UTF-16 (LE/BE),
//! and UTF-32. Every ordered pair of the six supported
//! [`tags::EncodingTag`]s can be validated, measured, and converted
//! through the same small API.
//!
//! Two implementations back every operation: a portable scalar state
//! machine (see [`scalar`]) that runs everywhere, and an AVX-512
//! ("icelake") vectorized UTF-8 validator (see [`vector`]) that is used
//! automatically when the host CPU supports it. Both are required to
//! agree byte-for-byte; see the properties exercised in
//! `tests/matrix_properties.rs`.
//!
//! ## Quick start
//!
//! ```
//! use textcodex::{convert, tags::EncodingTag, policy::Policy};
//!
//! let input = "café".as_bytes(); // UTF-8
//! let mut utf16 = [0u8; 16];
//! let result = convert(
//!     EncodingTag::Utf8,
//!     EncodingTag::Utf16Le,
//!     Policy::Default,
//!     input,
//!     &mut utf16,
//! );
//! assert!(result.is_ok());
//! ```
//!
//! ## Features
//!
//! - `std` (default) — enables runtime CPU feature detection, which the
//!   AVX-512 backend needs to ever be selected. Disabling it restricts the
//!   crate to the portable scalar backend.
//! - `serde` — derives `Serialize`/`Deserialize` for [`error::ErrorKind`],
//!   [`error::ValidateResult`], and [`error::ConvertResult`].
//! - `cli` — builds the `textcodex` command-line binary.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod api;
pub mod backend;
mod bom;
mod codec;
pub mod error;
pub mod policy;
pub mod tags;
mod units;

pub(crate) mod scalar;
pub(crate) mod vector;

pub use api::{convert, convert_to_utf8_chars, length, validate, validate_utf8_chars};
pub use backend::Backend;
pub use bom::sniff as sniff_bom;
pub use error::{ConvertResult, ErrorKind, ValidateResult};
pub use policy::Policy;
pub use tags::EncodingTag;
