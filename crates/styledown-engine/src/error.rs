use crate::font::FontTraits;

/// Errors from [`crate::convert`].
///
/// Markup never fails to parse; only the collaborator-supplied pieces can.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The [`crate::FontDeriver`] rejected a request. Its error is kept as the source.
    #[error("font derivation failed ({traits}): {source}")]
    FontDerivation {
        traits: FontTraits,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("invalid style configuration: {0}")]
    InvalidStyle(String),
}
