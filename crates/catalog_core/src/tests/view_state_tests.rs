use super::*;

#[test]
fn defaults_match_session_start() {
    let state = ViewState::default();
    assert_eq!(state.owner, OwnerFilter::All);
    assert!(state.search_query.is_empty());
    assert!(state.categories.is_empty());
    assert_eq!(state.sort_key, None);
    assert_eq!(state.sort_direction, SortDirection::Asc);
}

#[test]
fn search_query_is_lowercased_and_trimmed() {
    let mut store = ViewStateStore::new();
    assert!(store.set_search_query("  ApPl "));
    assert_eq!(store.state().search_query, "appl");

    assert!(store.clear_search());
    assert!(store.state().search_query.is_empty());
    assert!(!store.clear_search());
}

#[test]
fn header_activation_always_flips_direction() {
    let state = ViewState::default();

    let first = state.on_header_activate(SortColumn::Name);
    assert_eq!(first.sort_key, Some(SortColumn::Name));
    assert_eq!(first.sort_direction, SortDirection::Desc);

    let again = first.on_header_activate(SortColumn::Name);
    assert_eq!(again.sort_direction, SortDirection::Asc);

    // Switching columns flips too instead of resetting.
    let switched = again.on_header_activate(SortColumn::Id);
    assert_eq!(switched.sort_key, Some(SortColumn::Id));
    assert_eq!(switched.sort_direction, SortDirection::Desc);
}

#[test]
fn header_activation_leaves_filters_untouched() {
    let mut store = ViewStateStore::new();
    store.select_owner(OwnerFilter::Named("Bob".to_string()));
    store.set_search_query("kiwi");
    store.activate_header(SortColumn::User);

    let state = store.state();
    assert_eq!(state.owner, OwnerFilter::Named("Bob".to_string()));
    assert_eq!(state.search_query, "kiwi");
    assert_eq!(state.sort_key, Some(SortColumn::User));
}

#[test]
fn set_sort_key_does_not_touch_direction() {
    let mut store = ViewStateStore::new();
    store.set_sort_key(Some(SortColumn::Category));
    assert_eq!(store.state().sort_direction, SortDirection::Asc);

    store.toggle_sort_direction();
    assert_eq!(store.state().sort_direction, SortDirection::Desc);
    assert_eq!(store.state().sort_key, Some(SortColumn::Category));
}

#[test]
fn category_toggle_adds_then_removes() {
    let mut store = ViewStateStore::new();
    store.toggle_category(CategoryId(2));
    store.toggle_category(CategoryId(5));
    assert_eq!(
        store.state().categories.iter().copied().collect::<Vec<_>>(),
        vec![CategoryId(2), CategoryId(5)]
    );

    store.toggle_category(CategoryId(2));
    assert_eq!(
        store.state().categories.iter().copied().collect::<Vec<_>>(),
        vec![CategoryId(5)]
    );

    store.select_all_categories();
    assert!(store.state().categories.is_empty());
}

#[test]
fn reset_restores_defaults() {
    let mut store = ViewStateStore::new();
    store.select_owner(OwnerFilter::Named("Anna".to_string()));
    store.set_search_query("milk");
    store.toggle_category(CategoryId(1));
    store.activate_header(SortColumn::Id);

    assert!(store.reset());
    assert_eq!(store.state(), &ViewState::default());
    assert!(!store.reset());
}

#[test]
fn dispatch_reports_unchanged_state() {
    let mut store = ViewStateStore::new();
    assert!(!store.select_owner(OwnerFilter::All));
    assert!(store.select_owner(OwnerFilter::Named("Max".to_string())));
    assert!(!store.select_owner(OwnerFilter::Named("Max".to_string())));
}

#[test]
fn parses_sort_columns_from_cli_spelling() {
    assert_eq!("id".parse::<SortColumn>(), Ok(SortColumn::Id));
    assert_eq!(" Product ".parse::<SortColumn>(), Ok(SortColumn::Name));
    assert_eq!("CATEGORY".parse::<SortColumn>(), Ok(SortColumn::Category));
    assert_eq!("owner".parse::<SortColumn>(), Ok(SortColumn::User));
    assert_eq!(
        "price".parse::<SortColumn>(),
        Err(UnknownSortColumn("price".to_string()))
    );
    assert_eq!(SortColumn::Category.to_string(), "category");
}

#[test]
fn owner_filter_match_is_case_sensitive() {
    let bob = OwnerFilter::Named("Bob".to_string());
    assert!(bob.matches("Bob"));
    assert!(!bob.matches("bob"));
    assert!(OwnerFilter::All.matches("anyone"));
}
