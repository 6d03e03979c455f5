use thiserror::Error;

/// Errors surfaced by the catalog API itself.
///
/// Remote failures are not among them: the provider logs those and degrades
/// to local state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("use_catalog must be used within a CatalogProvider scope")]
    OutsideProvider,
}
