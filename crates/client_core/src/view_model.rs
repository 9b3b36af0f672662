use std::{cell::Cell, rc::Rc};

use shared::{domain::Model, error::AppError};
use tracing::debug;

use crate::interactor::ApplicationInteractor;

/// Number of button taps that make up one cycle: every tap but the last
/// appends an item, the last one requests a route change instead.
pub const TAPS_PER_ROUTE_CHANGE: u8 = 3;

/// Contract of the first screen: show the current item and add new ones.
pub trait ItemListViewModel {
    fn content(&self) -> Result<String, AppError>;
    fn add_new_item(&self);
}

/// Contract of the second screen: static content plus the first screen's item count.
pub trait SummaryViewModel {
    fn content(&self) -> Result<String, AppError>;
    fn view1_items_count(&self) -> usize;
}

pub struct View1ViewModel {
    interactor: Rc<dyn ApplicationInteractor>,
    tap_count: Cell<u8>,
}

impl View1ViewModel {
    pub fn new(interactor: Rc<dyn ApplicationInteractor>) -> Self {
        Self {
            interactor,
            tap_count: Cell::new(0),
        }
    }

    /// Taps counted in the current cycle, always below [`TAPS_PER_ROUTE_CHANGE`].
    pub fn tap_count(&self) -> u8 {
        self.tap_count.get()
    }
}

impl ItemListViewModel for View1ViewModel {
    fn content(&self) -> Result<String, AppError> {
        Ok(self.interactor.view1_model()?.content().to_string())
    }

    fn add_new_item(&self) {
        let taps = self.tap_count.get();
        if taps + 1 == TAPS_PER_ROUTE_CHANGE {
            self.tap_count.set(0);
            debug!(taps = taps + 1, "tap cycle complete");
            self.interactor.did_tap_3_times_action();
        } else {
            self.tap_count.set(taps + 1);
            debug!(taps = taps + 1, "adding item");
            self.interactor.add_new_view1_model_item();
        }
    }
}

pub struct View2ViewModel {
    interactor: Rc<dyn ApplicationInteractor>,
}

impl View2ViewModel {
    pub fn new(interactor: Rc<dyn ApplicationInteractor>) -> Self {
        Self { interactor }
    }
}

impl SummaryViewModel for View2ViewModel {
    fn content(&self) -> Result<String, AppError> {
        Ok(self.interactor.view2_model()?.content().to_string())
    }

    fn view1_items_count(&self) -> usize {
        self.interactor.view1_items_count()
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
