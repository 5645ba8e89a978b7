//! Configuration types for the tree builder

/// Configuration for structure generation.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Echo the rendered structure to the console after saving it
    pub display_structure: bool,
    /// Names or glob patterns of entries to leave out
    pub ignore_patterns: Vec<String>,
}
