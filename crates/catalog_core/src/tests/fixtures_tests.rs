use super::*;

use std::fs;

use shared::domain::{CategoryId, Sex, UserId};

#[test]
fn embedded_fixtures_parse() {
    let fixtures = FixtureSet::embedded().expect("embedded fixtures");
    assert_eq!(fixtures.users.len(), 4);
    assert_eq!(fixtures.categories.len(), 5);
    assert_eq!(fixtures.products.len(), 14);
    assert_eq!(fixtures.users[1].sex, Sex::Female);
    assert_eq!(fixtures.categories[0].owner_id, UserId(2));
}

#[test]
fn reports_which_collection_is_malformed() {
    let err = FixtureSet::from_json("[]", "{not json", "[]").expect_err("malformed");
    assert!(matches!(err, FixtureError::Parse { name: "categories", .. }));
}

#[test]
fn loads_fixture_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(USERS_FILE),
        r#"[{"id":7,"name":"Zoe","sex":"f","email":"zoe@example.com","phone":"1"}]"#,
    )
    .expect("users");
    fs::write(
        dir.path().join(CATEGORIES_FILE),
        r#"[{"id":3,"title":"Tea","icon":"🍵","ownerId":7}]"#,
    )
    .expect("categories");
    fs::write(
        dir.path().join(PRODUCTS_FILE),
        r#"[{"id":1,"name":"Sencha","categoryId":3}]"#,
    )
    .expect("products");

    let fixtures = FixtureSet::from_dir(dir.path()).expect("fixture dir");
    assert_eq!(fixtures.users[0].name, "Zoe");
    assert_eq!(fixtures.products[0].category_id, CategoryId(3));
}

#[test]
fn missing_fixture_file_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = FixtureSet::from_dir(dir.path()).expect_err("missing files");
    match err {
        FixtureError::Read { path, .. } => assert!(path.ends_with(USERS_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}
