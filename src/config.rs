/// What to do when an inserted point coincides with an already-present vertex.
///
/// Default is `Skip`, which silently keeps the first occurrence rather than
/// surprising a caller who passes a point cloud with accidental duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    Skip,
    Error,
}

/// Runtime knobs for a triangulation build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Seed for the randomised insertion order used by the history-DAG
    /// construction. `None` draws entropy from the OS.
    pub seed: Option<u64>,
    /// Whether to leave the ghost triangle fan attached after construction
    /// finishes. Point location needs it; callers that only want the solid
    /// triangles can turn it off.
    pub keep_ghosts: bool,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        TriangulationConfig {
            duplicate_policy: DuplicatePolicy::default(),
            seed: None,
            keep_ghosts: true,
        }
    }
}
