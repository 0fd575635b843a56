//! Caller-selectable behaviour for `convert` when malformed input is met.

/// How a `convert` call should behave when it encounters malformed input.
///
/// `Policy` only changes behaviour at the moment an error would otherwise
/// be reported; every policy processes well-formed input identically, and
/// is required to produce byte-for-byte identical output to every other
/// policy on well-formed input (see `tests/matrix_properties.rs`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Policy {
    /// Stop at the first malformed unit and report it. This is the
    /// behaviour a caller gets with no policy specified.
    #[default]
    Default,
    /// Alias of [`Policy::Default`], named for callers that want to be
    /// explicit that they intend to inspect the returned error.
    ReturnResult,
    /// The caller asserts the input is already well-formed for the source
    /// encoding. Semantic checks (overlong, surrogate, too-large, header
    /// bits) are skipped; bounds checks are not, so this never reads past
    /// the end of the input slice. If the assertion is false the decoded
    /// code points are unspecified, but never out-of-range for the
    /// destination encoding's own representable set beyond what a
    /// straightforward bit-reinterpretation would produce.
    AssumeValid,
    /// Either the entire input converts successfully, or nothing is
    /// reported as written. `output_written` is forced to zero on error.
    ZeroOrProcessed,
}
