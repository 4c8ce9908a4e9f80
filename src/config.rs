//! Build-time configuration knobs for the tree builder.

/// Configuration for [`crate::builder::build_max_tree`].
///
/// The algorithm itself has exactly one tunable: whether `find_root`
/// compresses every visited node onto the discovered root in a dedicated
/// second pass (the default, and the only mode that preserves the
/// near-constant amortized cost the builder's complexity bound assumes) or
/// is left to compress lazily. The latter is never faster in practice and
/// exists only so a caller benchmarking the algorithm can isolate the cost
/// of path compression; it is not recommended for production use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    path_compression: bool,
}

impl BuildConfig {
    /// Full two-pass path compression on every `find_root` call. This is
    /// the mode the complexity bound in the engine's design notes assumes.
    pub fn new() -> Self {
        Self { path_compression: true }
    }

    /// Disables eager path compression. Kept for benchmarking only.
    pub fn without_path_compression(mut self) -> Self {
        self.path_compression = false;
        self
    }

    /// Whether `find_root` performs eager path compression.
    pub fn path_compression(&self) -> bool {
        self.path_compression
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
