//! Join stage: resolves product → category → owner once at startup.

use std::collections::HashMap;

use shared::{
    domain::{Category, CategoryId, EnrichedProduct, User, UserId},
    error::DataIntegrityError,
};

use crate::fixtures::FixtureSet;

/// Read-only catalog built once per process and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
    categories: Vec<Category>,
    rows: Vec<EnrichedProduct>,
}

impl Dataset {
    pub fn from_fixtures(fixtures: FixtureSet) -> Result<Self, DataIntegrityError> {
        let FixtureSet {
            users,
            categories,
            products,
        } = fixtures;

        // First record wins on duplicate ids.
        let mut categories_by_id: HashMap<CategoryId, &Category> = HashMap::new();
        for category in &categories {
            categories_by_id.entry(category.id).or_insert(category);
        }
        let mut users_by_id: HashMap<UserId, &User> = HashMap::new();
        for user in &users {
            users_by_id.entry(user.id).or_insert(user);
        }

        let mut rows = Vec::with_capacity(products.len());
        for product in products {
            let category = *categories_by_id.get(&product.category_id).ok_or(
                DataIntegrityError::MissingCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                },
            )?;
            let user = *users_by_id.get(&category.owner_id).ok_or(
                DataIntegrityError::MissingOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                },
            )?;
            rows.push(EnrichedProduct::new(product, category.clone(), user.clone()));
        }

        tracing::info!(
            users = users.len(),
            categories = categories.len(),
            products = rows.len(),
            "catalog dataset joined"
        );

        Ok(Self {
            users,
            categories,
            rows,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Enriched rows in fixture order.
    pub fn rows(&self) -> &[EnrichedProduct] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
