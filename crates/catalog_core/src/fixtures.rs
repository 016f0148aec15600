//! Seed collections for the catalog. Compiled in by default; a directory holding
//! `users.json`, `categories.json` and `products.json` can replace them.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use shared::domain::{Category, Product, User};

use crate::error::FixtureError;

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../fixtures/products.json");

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl FixtureSet {
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_USERS, EMBEDDED_CATEGORIES, EMBEDDED_PRODUCTS)
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            users: parse_collection("users", users)?,
            categories: parse_collection("categories", categories)?,
            products: parse_collection("products", products)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self, FixtureError> {
        let users = read_fixture(dir, USERS_FILE)?;
        let categories = read_fixture(dir, CATEGORIES_FILE)?;
        let products = read_fixture(dir, PRODUCTS_FILE)?;
        tracing::debug!(dir = %dir.display(), "loaded fixture files");
        Self::from_json(&users, &categories, &products)
    }
}

fn read_fixture(dir: &Path, file_name: &str) -> Result<String, FixtureError> {
    let path = dir.join(file_name);
    fs::read_to_string(&path).map_err(|source| FixtureError::Read { path, source })
}

fn parse_collection<T: DeserializeOwned>(
    name: &'static str,
    raw: &str,
) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Parse { name, source })
}

#[cfg(test)]
#[path = "tests/fixtures_tests.rs"]
mod tests;
