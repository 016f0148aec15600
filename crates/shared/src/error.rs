use thiserror::Error;

use crate::domain::{CategoryId, ProductId, UserId};

/// A fixture reference that does not resolve. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },
    #[error("category {category_id} references missing owner {owner_id}")]
    MissingOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}
