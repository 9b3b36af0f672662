//! Rendering layer: turns view model output into display strings.

use std::rc::Rc;

use client_core::{ItemListViewModel, SummaryViewModel};
use shared::error::AppError;

pub trait View {
    fn render(&self) -> Result<String, AppError>;
}

pub struct View1 {
    view_model: Rc<dyn ItemListViewModel>,
}

impl View1 {
    pub fn new(view_model: Rc<dyn ItemListViewModel>) -> Self {
        Self { view_model }
    }

    pub fn add_new_item_button_click_action(&self) {
        self.view_model.add_new_item();
    }
}

impl View for View1 {
    fn render(&self) -> Result<String, AppError> {
        self.view_model.content()
    }
}

pub struct View2 {
    view_model: Rc<dyn SummaryViewModel>,
}

impl View2 {
    pub fn new(view_model: Rc<dyn SummaryViewModel>) -> Self {
        Self { view_model }
    }
}

impl View for View2 {
    fn render(&self) -> Result<String, AppError> {
        Ok(format!(
            "Content: |{}| -- Items: {}",
            self.view_model.content()?,
            self.view_model.view1_items_count()
        ))
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
