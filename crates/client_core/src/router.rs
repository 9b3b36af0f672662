use std::cell::Cell;

use shared::domain::Route;
use tracing::info;

/// Holder of the single current navigation destination.
///
/// Callers poll [`Router::current_route`]; there are no change notifications.
pub trait Router {
    fn current_route(&self) -> Route;
    fn route(&self, to: Route);
}

#[derive(Debug, Default)]
pub struct AppRouter {
    current: Cell<Route>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self::starting_at(Route::default())
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: Cell::new(route),
        }
    }
}

impl Router for AppRouter {
    fn current_route(&self) -> Route {
        self.current.get()
    }

    fn route(&self, to: Route) {
        let from = self.current.replace(to);
        info!(from = %from, to = %to, path = %to.path(), "route changed");
    }
}
