//! Catalog load lifecycle.

use crate::catalog::Product;
use crate::CommerceError;
use serde::Serialize;
use tracing::debug;

/// Status of the catalog fetch, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }
}

/// Lifecycle of the one-shot catalog fetch.
///
/// `Idle -> Loading -> Succeeded | Failed`. A failed load stays failed
/// until [`LoadState::reset`] is called; nothing retries on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<Product>),
    Failed(String),
}

impl LoadState {
    /// Current status.
    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Idle => LoadStatus::Idle,
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Succeeded(_) => LoadStatus::Succeeded,
            LoadState::Failed(_) => LoadStatus::Failed,
        }
    }

    /// Mark the fetch as started. Only valid from `Idle`.
    pub fn begin(&mut self) -> Result<(), CommerceError> {
        self.transition(LoadStatus::Loading, |state| {
            matches!(state, LoadState::Idle).then_some(LoadState::Loading)
        })
    }

    /// Record the fetched products. Only valid from `Loading`.
    pub fn succeed(&mut self, products: Vec<Product>) -> Result<(), CommerceError> {
        let mut products = Some(products);
        self.transition(LoadStatus::Succeeded, |state| match state {
            LoadState::Loading => products.take().map(LoadState::Succeeded),
            _ => None,
        })
    }

    /// Record a fetch failure. Only valid from `Loading`.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), CommerceError> {
        let mut message = Some(message.into());
        self.transition(LoadStatus::Failed, |state| match state {
            LoadState::Loading => message.take().map(LoadState::Failed),
            _ => None,
        })
    }

    /// Discard the current result so the catalog can be loaded again.
    pub fn reset(&mut self) {
        debug!(from = self.status().as_str(), "catalog load state reset");
        *self = LoadState::Idle;
    }

    /// Loaded products, if the fetch succeeded.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            LoadState::Succeeded(products) => Some(products),
            _ => None,
        }
    }

    /// Failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded products, or an error naming the current status.
    pub fn require_products(&self) -> Result<&[Product], CommerceError> {
        self.products()
            .ok_or(CommerceError::CatalogNotLoaded(self.status().as_str()))
    }

    /// Text shown in place of the product listing while loading or after
    /// a failure. An idle catalog shows its (empty) listing instead.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            LoadState::Loading => Some("Loading...".to_string()),
            LoadState::Failed(message) => Some(format!("Error: {message}")),
            LoadState::Idle | LoadState::Succeeded(_) => None,
        }
    }

    fn transition(
        &mut self,
        to: LoadStatus,
        next: impl FnOnce(&LoadState) -> Option<LoadState>,
    ) -> Result<(), CommerceError> {
        let from = self.status();
        match next(self) {
            Some(state) => {
                debug!(from = from.as_str(), to = to.as_str(), "catalog load transition");
                *self = state;
                Ok(())
            }
            None => Err(CommerceError::InvalidLoadTransition {
                from: from.as_str(),
                to: to.as_str(),
            }),
        }
    }
}
