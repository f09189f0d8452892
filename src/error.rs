//! Errors produced by this crate.

/// Errors reserved for future fallible paths in [`crate::ReversibleMt19937`].
///
/// Every operation in the documented public contract is currently
/// infallible: a generator seeded via [`crate::ReversibleMt19937::new`]
/// accepts any `u32` seed, and `next_u32`/`next_uniform`/`next_normal_pair`/
/// `reverse` are all total functions of a validly constructed generator.
/// This type exists so a future fallible path (for example, a `no_std`
/// build without a `libm`-equivalent `sqrt`/`ln`/`cos`/`sin` implementation
/// available) has somewhere to report through without a breaking API
/// change; it has no public constructor today.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReversalError {}

impl core::fmt::Display for ReversalError {
    fn fmt(&self, _f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {}
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReversalError {}
