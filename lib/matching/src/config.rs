/// Holds the configuration of a [GraphMatcher](crate::GraphMatcher).
///
/// Refinement itself is not bounded; it terminates after at most one round per blank node. The
/// bounds only apply to the search for a bijection between ambiguous blank nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingConfig {
    /// How ambiguous groups left by the refinement are resolved.
    resolution: ResolutionStrategy,
    /// The largest group the permutation search accepts.
    max_group_size: usize,
    /// The maximum number of candidate pairings a resolver tries.
    max_attempts: usize,
}

impl MatchingConfig {
    pub const DEFAULT_MAX_GROUP_SIZE: usize = 8;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

    /// Creates a new [MatchingConfig] with default values.
    pub fn new() -> Self {
        Self {
            resolution: ResolutionStrategy::default(),
            max_group_size: Self::DEFAULT_MAX_GROUP_SIZE,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_resolution(mut self, resolution: ResolutionStrategy) -> Self {
        self.resolution = resolution;
        self
    }

    #[must_use]
    pub fn with_max_group_size(mut self, max_group_size: usize) -> Self {
        self.max_group_size = max_group_size;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn resolution(&self) -> ResolutionStrategy {
        self.resolution
    }

    pub fn max_group_size(&self) -> usize {
        self.max_group_size
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects the [BijectionResolver](crate::BijectionResolver) used after refinement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolutionStrategy {
    /// Pairs one blank node at a time and refines again after each guess.
    #[default]
    Backtracking,
    /// Tries all permutations within each ambiguous group.
    Permutation,
    /// Fails with [MatchingError::Unresolved](crate::MatchingError::Unresolved) if ambiguous
    /// groups remain.
    Disabled,
}
