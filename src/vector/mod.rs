//! The AVX-512 ("icelake") accelerated backend.
//!
//! Only UTF-8 validation is vectorized today: it is the encoding with the
//! most expensive per-byte scalar state machine (see
//! [`crate::vector::utf8`]). Every other operation — UTF-8 `convert`, and
//! every operation on Latin-1, UTF-16, and UTF-32 — runs on the scalar
//! backend regardless of CPU features; the ASCII block fast path in
//! [`crate::scalar::block`] already captures most of the available
//! speedup there.
//!
//! The vector path is never the source of truth: it is only ever
//! permitted to either match the scalar backend's answer exactly or defer
//! to it outright. [`crate::vector::utf8::validate`] documents the
//! specific cases it defers on.

pub(crate) mod dispatch;
pub(crate) mod tables;
pub(crate) mod utf8;

pub(crate) use dispatch::avx512_available;
