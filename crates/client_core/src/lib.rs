//! Presentation core: routing, the application interactor, and screen view models.
//!
//! Dependency direction is strictly downward: view models talk to the
//! [`ApplicationInteractor`], which talks to the item repository and the
//! [`Router`]. Every layer is reached through a trait object behind an `Rc`,
//! and each object mutates only its own interior state.

pub mod interactor;
pub mod router;
pub mod view_model;

pub use interactor::{AppInteractor, ApplicationInteractor};
pub use router::{AppRouter, Router};
pub use view_model::{
    ItemListViewModel, SummaryViewModel, View1ViewModel, View2ViewModel, TAPS_PER_ROUTE_CHANGE,
};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
