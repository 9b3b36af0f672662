use std::rc::Rc;

use client_core::{
    AppInteractor, AppRouter, ItemListViewModel, Router, SummaryViewModel, View1ViewModel,
    View2ViewModel,
};
use shared::domain::Route;
use storage::{InMemoryItemStore, ItemRepository};

#[test]
fn three_taps_append_twice_then_route_to_second_screen() {
    let store = Rc::new(InMemoryItemStore::new());
    let router = Rc::new(AppRouter::new());
    let interactor = Rc::new(AppInteractor::new(store.clone(), router.clone()));
    let first = View1ViewModel::new(interactor.clone());
    let second = View2ViewModel::new(interactor);

    first.add_new_item();
    assert_eq!(first.content().expect("content"), "Interactor Model: View 1.1");
    first.add_new_item();
    assert_eq!(first.content().expect("content"), "Interactor Model: View 1.2");
    assert_eq!(router.current_route(), Route::First);

    first.add_new_item();
    assert_eq!(first.content().expect("content"), "Interactor Model: View 1.2");
    assert_eq!(router.current_route(), Route::Second);

    assert_eq!(store.len(), 3);
    assert_eq!(second.view1_items_count(), 3);
    assert_eq!(
        second.content().expect("content"),
        "Interactor Model: View 1"
    );
}

#[test]
fn many_taps_keep_suffixes_contiguous() {
    let store = Rc::new(InMemoryItemStore::new());
    let router = Rc::new(AppRouter::new());
    let interactor = Rc::new(AppInteractor::new(store.clone(), router));
    let first = View1ViewModel::new(interactor);

    for _ in 0..10 {
        first.add_new_item();
    }

    // 10 taps -> 3 route changes, 7 appends.
    let items = store.items();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0].content(), "Interactor Model: View 1");
    assert_eq!(items[7].content(), "Interactor Model: View 1.7");
}
