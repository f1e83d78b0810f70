//! Configuration types controlling how extreme generated values may be.

/// Reference ceiling for the size budget.
///
/// Requested sizes are capped at this value before being used in any
/// calculation, so callers cannot request unbounded-cost generation by
/// mistake. A generator evaluated at `REFERENCE_SIZE` must be able to reach
/// the most extreme values its type allows (for integers, the maximum
/// representable magnitude).
pub const REFERENCE_SIZE: usize = 100;

/// Ambient configuration passed to every generator invocation.
///
/// Generators hold no state of their own; the size budget lives here and is
/// read per call. The configuration is cheap to clone, which is how
/// combinators such as [`resize`](crate::combinator::resize) derive a
/// modified context without touching the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Requested size budget. How "extreme" a generated value may be: for
    /// integers this scales the number of active bits, for collections the
    /// maximum length.
    pub size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: REFERENCE_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the given size budget.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// The size actually used in calculations: `min(size, REFERENCE_SIZE)`.
    pub fn effective_size(&self) -> usize {
        self.size.min(REFERENCE_SIZE)
    }

    /// A copy of this configuration with a different size budget.
    pub fn with_size(&self, size: usize) -> Self {
        Self { size }
    }
}
