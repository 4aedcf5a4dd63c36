use crate::playlist::ExclusionRule;

/// What to do when a folder or list file cannot be read mid-resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Log the failure and continue with the remaining entries
    #[default]
    SkipAndLog,
    /// Abort the whole resolution with the error
    Propagate,
}

/// Options for playlist resolution, held by each resolver instance
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// File endings that never become playlist entries
    pub exclusions: ExclusionRule,
    /// Handling of unreadable folders and list files below the resolution root
    pub read_errors: ReadErrorPolicy,
}
