//! Composition point: builds the object graph and runs the scripted session.

use std::rc::Rc;

use client_core::{AppInteractor, AppRouter, Router, View1ViewModel, View2ViewModel};
use serde::Serialize;
use shared::{domain::Route, error::AppError};
use storage::InMemoryItemStore;
use tracing::info;

use crate::{
    config::Settings,
    views::{View, View1, View2},
};

/// Blank lines printed between the first and second screen in text output.
const SCREEN_SEPARATOR_LINES: usize = 3;

pub struct App {
    router: Rc<AppRouter>,
    view1: View1,
    view2: View2,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let router = Rc::new(AppRouter::starting_at(settings.initial_route));
        let repository = Rc::new(InMemoryItemStore::with_prefix(
            settings.content_prefix.clone(),
        ));
        let view2_seed = repository.prefix().to_string();
        let interactor = Rc::new(AppInteractor::with_view2_seed(
            repository,
            router.clone(),
            view2_seed,
        ));

        let view1 = View1::new(Rc::new(View1ViewModel::new(interactor.clone())));
        let view2 = View2::new(Rc::new(View2ViewModel::new(interactor)));

        Self {
            router,
            view1,
            view2,
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current_route()
    }

    pub fn render(&self, route: Route) -> Result<String, AppError> {
        match route {
            Route::First => self.view1.render(),
            Route::Second => self.view2.render(),
        }
    }

    pub fn click(&self) {
        self.view1.add_new_item_button_click_action();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub initial_route: Route,
    pub first_screen: Vec<String>,
    pub final_route: Route,
    pub second_screen: String,
}

impl Transcript {
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = self.first_screen.clone();
        lines.extend(std::iter::repeat(String::new()).take(SCREEN_SEPARATOR_LINES));
        lines.push(self.second_screen.clone());
        lines
    }
}

/// Renders the current screen (clicking through the first screen `clicks`
/// times), then re-reads the route and renders whichever screen it points at.
pub fn run_script(app: &App, clicks: usize) -> Result<Transcript, AppError> {
    let initial_route = app.current_route();
    info!(route = %initial_route, clicks, "starting scripted session");

    let mut first_screen = vec![app.render(initial_route)?];
    if initial_route == Route::First {
        for _ in 0..clicks {
            app.click();
            first_screen.push(app.render(Route::First)?);
        }
    }

    let final_route = app.current_route();
    let second_screen = app.render(final_route)?;
    info!(route = %final_route, "scripted session finished");

    Ok(Transcript {
        initial_route,
        first_screen,
        final_route,
        second_screen,
    })
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
