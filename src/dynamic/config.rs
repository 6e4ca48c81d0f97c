//! Configuration of the runtime evaluator.

/// Limits and switches for an [`Evaluator`](super::Evaluator).
///
/// The depth limit plays the role of the compiler's recursion limit: every
/// nested `eval` or normalization step counts as one frame, and exceeding the
/// limit yields [`EvalError::DepthLimitExceeded`](super::EvalError).
///
/// # Examples
///
/// ```rust
/// use turbars::dynamic::EvalConfig;
///
/// let config = EvalConfig::new().with_max_depth(64).with_memoization(false);
/// assert_eq!(config.max_depth(), 64);
/// assert!(!config.memoization());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    max_depth: usize,
    memoization: bool,
}

impl EvalConfig {
    /// Default maximum evaluation depth.
    ///
    /// A frame costs a few native stack frames, so the default stays well
    /// inside a 2 MiB thread stack (the `std::thread` and test default) even
    /// in debug builds. Raise it only together with the stack size.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Creates the default configuration: depth [`Self::DEFAULT_MAX_DEPTH`],
    /// memoization on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            memoization: true,
        }
    }

    /// Sets the maximum evaluation depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables caching of class applications.
    #[must_use]
    pub const fn with_memoization(mut self, memoization: bool) -> Self {
        self.memoization = memoization;
        self
    }

    /// Returns the configured maximum evaluation depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns whether class applications are cached.
    #[must_use]
    pub const fn memoization(&self) -> bool {
        self.memoization
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new()
    }
}
