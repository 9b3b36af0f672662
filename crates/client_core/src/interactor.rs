use std::rc::Rc;

use shared::{
    domain::{Route, View1Model, View2Model, DEFAULT_CONTENT_PREFIX},
    error::AppError,
};
use storage::ItemRepository;
use tracing::debug;

use crate::router::Router;

/// Mediator between screen view models and the repository/router layer.
pub trait ApplicationInteractor {
    fn view1_model(&self) -> Result<View1Model, AppError>;
    fn view2_model(&self) -> Result<View2Model, AppError>;
    fn add_new_view1_model_item(&self);
    fn view1_items_count(&self) -> usize;
    fn did_tap_3_times_action(&self);
}

pub struct AppInteractor {
    repository: Rc<dyn ItemRepository>,
    router: Rc<dyn Router>,
    // Read-only: nothing appends to the View2 list.
    view2_items: Vec<String>,
}

impl AppInteractor {
    pub fn new(repository: Rc<dyn ItemRepository>, router: Rc<dyn Router>) -> Self {
        Self::with_view2_seed(repository, router, DEFAULT_CONTENT_PREFIX)
    }

    pub fn with_view2_seed(
        repository: Rc<dyn ItemRepository>,
        router: Rc<dyn Router>,
        seed: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            router,
            view2_items: vec![seed.into()],
        }
    }

    #[cfg(test)]
    pub(crate) fn without_view2_items(repository: Rc<dyn ItemRepository>, router: Rc<dyn Router>) -> Self {
        Self {
            repository,
            router,
            view2_items: Vec::new(),
        }
    }
}

impl ApplicationInteractor for AppInteractor {
    fn view1_model(&self) -> Result<View1Model, AppError> {
        self.repository.current().map(View1Model::from)
    }

    fn view2_model(&self) -> Result<View2Model, AppError> {
        let content = self.view2_items.last().ok_or(AppError::EmptyView2Content)?;
        Ok(View2Model {
            content: content.clone(),
        })
    }

    fn add_new_view1_model_item(&self) {
        self.repository.add_item();
    }

    fn view1_items_count(&self) -> usize {
        self.repository.len()
    }

    fn did_tap_3_times_action(&self) {
        debug!("third tap; switching to second screen");
        self.router.route(Route::Second);
    }
}
