//! Catalogue lookup errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// No entry is registered under the slug (or the route carries no slug).
    #[error("no artwork found for `{0}`")]
    NotFound(String),
}
