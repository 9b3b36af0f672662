use super::*;
use std::rc::Rc;

use shared::domain::{Model, Route};
use storage::{InMemoryItemStore, ItemRepository};

fn setup() -> (Rc<InMemoryItemStore>, Rc<AppRouter>, AppInteractor) {
    let store = Rc::new(InMemoryItemStore::new());
    let router = Rc::new(AppRouter::new());
    let interactor = AppInteractor::new(store.clone(), router.clone());
    (store, router, interactor)
}

#[test]
fn router_starts_on_first_route() {
    assert_eq!(AppRouter::new().current_route(), Route::First);
    assert_eq!(
        AppRouter::starting_at(Route::Second).current_route(),
        Route::Second
    );
}

#[test]
fn router_returns_the_value_just_set() {
    let router = AppRouter::new();
    for route in [Route::Second, Route::Second, Route::First, Route::Second] {
        router.route(route);
        assert_eq!(router.current_route(), route);
    }
}

#[test]
fn view1_model_tracks_repository_current_item() {
    let (store, _, interactor) = setup();
    assert_eq!(
        interactor.view1_model().expect("model").content(),
        "Interactor Model: View 1"
    );
    store.add_item();
    assert_eq!(
        interactor.view1_model().expect("model").content(),
        "Interactor Model: View 1.1"
    );
}

#[test]
fn items_count_matches_repository_length() {
    let (store, _, interactor) = setup();
    for _ in 0..4 {
        assert_eq!(interactor.view1_items_count(), store.len());
        interactor.add_new_view1_model_item();
    }
    assert_eq!(interactor.view1_items_count(), 5);
    assert_eq!(store.items().len(), 5);
}

#[test]
fn view2_model_is_unaffected_by_appends() {
    let (_, _, interactor) = setup();
    interactor.add_new_view1_model_item();
    interactor.add_new_view1_model_item();
    assert_eq!(
        interactor.view2_model().expect("model").content(),
        "Interactor Model: View 1"
    );
}

#[test]
fn view2_seed_can_be_overridden() {
    let store = Rc::new(InMemoryItemStore::with_prefix("Inbox"));
    let router = Rc::new(AppRouter::new());
    let interactor = AppInteractor::with_view2_seed(store, router, "Inbox");
    assert_eq!(interactor.view2_model().expect("model").content(), "Inbox");
}

#[test]
fn third_tap_action_switches_router_to_second() {
    let (store, router, interactor) = setup();
    interactor.did_tap_3_times_action();
    assert_eq!(router.current_route(), Route::Second);
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_view2_list_reports_its_own_error() {
    let store = Rc::new(InMemoryItemStore::new());
    let router = Rc::new(AppRouter::new());
    let interactor = AppInteractor::without_view2_items(store, router);
    let err = interactor.view2_model().expect_err("should fail");
    assert_eq!(err, shared::error::AppError::EmptyView2Content);
    assert!(interactor.view1_model().is_ok());
}
