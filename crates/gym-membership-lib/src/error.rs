/// Why the membership manager turned down a mutation.
///
/// Callers only ever observe a `false` result; the kind is kept for logging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("plan '{0}' is not in the catalog")]
    PlanNotFound(String),

    #[error("plan '{0}' is not available")]
    PlanUnavailable(String),

    #[error("feature '{0}' is not in the catalog")]
    FeatureNotFound(String),

    #[error("feature '{0}' is not available")]
    FeatureUnavailable(String),

    #[error("feature '{0}' has already been added")]
    DuplicateFeature(String),

    #[error("feature '{0}' has not been added")]
    FeatureNotAdded(String),

    #[error("member count must be at least 1, got {0}")]
    InvalidMemberCount(i64),
}
