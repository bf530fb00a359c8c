//! Drives the catalog load lifecycle.

use storefront_commerce::catalog::{LoadState, LoadStatus};
use storefront_commerce::CommerceError;
use tracing::{info, warn};

use crate::ProductSource;

/// Loads the catalog from a [`ProductSource`] into a [`LoadState`].
///
/// Each call performs at most one fetch. A failed fetch is recorded in the
/// state and left there; there is no retry and no timeout.
pub struct CatalogLoader<S> {
    source: S,
}

impl<S: ProductSource> CatalogLoader<S> {
    /// Create a loader over a source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the catalog into an idle state.
    ///
    /// Returns the resulting status. Fetch failures are not errors here:
    /// they end in [`LoadStatus::Failed`]. An error is returned only when
    /// `state` is not idle, in which case nothing is fetched.
    pub async fn load(&self, state: &mut LoadState) -> Result<LoadStatus, CommerceError> {
        state.begin()?;

        match self.source.fetch_products().await {
            Ok(products) => {
                info!(
                    source = %self.source.describe(),
                    count = products.len(),
                    "catalog loaded"
                );
                state.succeed(products)?;
            }
            Err(e) => {
                warn!(source = %self.source.describe(), error = %e, "catalog load failed");
                state.fail(e.to_string())?;
            }
        }

        Ok(state.status())
    }

    /// Discard whatever `state` holds and load again.
    pub async fn reload(&self, state: &mut LoadState) -> Result<LoadStatus, CommerceError> {
        state.reset();
        self.load(state).await
    }
}
