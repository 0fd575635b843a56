//! The portable reference backend: a byte-at-a-time (with an ASCII block
//! fast path) state machine that runs on every target this crate builds
//! for. It defines the ground truth every other backend must match
//! bit-for-bit — see the equivalence tests in [`crate::vector`].

pub(crate) mod block;
pub(crate) mod generic;
pub(crate) mod latin1;
pub(crate) mod utf16;
pub(crate) mod utf32;
pub(crate) mod utf8;

pub(crate) use generic::{convert, length, validate};
