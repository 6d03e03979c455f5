//! Task-scoped access to the current provider.
//!
//! [`CatalogProvider::scope`](super::CatalogProvider::scope) binds a
//! provider for the duration of a future; code running inside it reaches the
//! provider with [`use_catalog`]. Tasks started with `tokio::spawn` do not
//! inherit the binding.

use super::CatalogProvider;
use crate::error::CatalogError;

tokio::task_local! {
    pub(super) static CURRENT: CatalogProvider;
}

/// Like [`use_catalog`], but returns [`CatalogError::OutsideProvider`]
/// instead of panicking when no provider is bound.
pub fn try_use_catalog() -> Result<CatalogProvider, CatalogError> {
    CURRENT
        .try_with(CatalogProvider::clone)
        .map_err(|_| CatalogError::OutsideProvider)
}

/// Returns the provider bound to the current task scope.
///
/// # Panics
///
/// Panics when called outside [`CatalogProvider::scope`]. That is a
/// programming error, not a runtime condition.
pub fn use_catalog() -> CatalogProvider {
    match try_use_catalog() {
        Ok(provider) => provider,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_try_use_catalog_outside_scope() {
        assert!(matches!(
            try_use_catalog(),
            Err(CatalogError::OutsideProvider)
        ));
    }

    #[tokio::test]
    #[should_panic(expected = "use_catalog must be used within a CatalogProvider scope")]
    async fn test_use_catalog_outside_scope_panics() {
        use_catalog();
    }

    #[tokio::test]
    async fn test_use_catalog_inside_scope() {
        let provider = CatalogProvider::mount(None).await;

        let count = provider
            .scope(async {
                let catalog = use_catalog();
                catalog.products_by_category("Razors").len()
            })
            .await;

        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn test_scope_shares_state() {
        let provider = CatalogProvider::mount(None).await;

        provider
            .scope(async {
                use_catalog().delete_product("4");
            })
            .await;

        assert!(provider.get_product("4").is_none());
    }
}
