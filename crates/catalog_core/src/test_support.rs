use shared::domain::{
    Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId,
};

use crate::{dataset::Dataset, fixtures::FixtureSet};

pub fn user(id: i64, name: &str, sex: Sex) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        sex,
        email: format!("{}@example.com", name.to_lowercase()),
        phone: format!("+1 555 010{id}"),
    }
}

pub fn category(id: i64, title: &str, icon: &str, owner_id: i64) -> Category {
    Category {
        id: CategoryId(id),
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id: UserId(owner_id),
    }
}

pub fn product(id: i64, name: &str, category_id: i64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category_id: CategoryId(category_id),
    }
}

/// Alice, Bob and Carol; Bob owns Fruits, Alice owns Appliances, Carol owns nothing.
pub fn scenario_fixtures() -> FixtureSet {
    FixtureSet {
        users: vec![
            user(1, "Alice", Sex::Female),
            user(2, "Bob", Sex::Male),
            user(3, "Carol", Sex::Female),
        ],
        categories: vec![
            category(1, "Fruits", "🍏", 2),
            category(2, "Appliances", "🔌", 1),
        ],
        products: vec![
            product(1, "Pineapple", 1),
            product(2, "Toaster", 2),
            product(3, "Kiwi", 1),
            product(4, "Blender", 2),
        ],
    }
}

pub fn scenario_dataset() -> Dataset {
    Dataset::from_fixtures(scenario_fixtures()).expect("scenario fixtures resolve")
}

pub fn ids(rows: &[&EnrichedProduct]) -> Vec<i64> {
    rows.iter().map(|row| row.id.0).collect()
}
