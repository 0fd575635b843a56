//! Explicit backend selection, for callers benchmarking the scalar and
//! vector paths against each other or pinning behaviour on a machine whose
//! CPU feature detection they don't trust.

/// Which implementation an [`crate::api`] call should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Backend {
    /// The portable state-machine backend in [`crate::scalar`]. Always
    /// available.
    Scalar,
    /// The AVX-512 backend in [`crate::vector`]. Only accelerates UTF-8
    /// validation (see its module docs); every other operation silently
    /// runs on the scalar backend even when this is selected.
    Vector,
    /// Use the vector backend where it is both available on this CPU and
    /// applicable to the operation, otherwise fall back to scalar. This is
    /// the default for every [`crate::api`] entry point that doesn't take
    /// an explicit `Backend`.
    #[default]
    Auto,
}

impl Backend {
    /// True if the AVX-512 backend is usable on this CPU.
    #[inline]
    pub fn vector_available() -> bool {
        crate::vector::avx512_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_auto() {
        assert_eq!(Backend::default(), Backend::Auto);
    }
}
