use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_CONTENT_PREFIX: &str = "Interactor Model: View 1";

/// A single immutable piece of screen content held by the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    content: String,
}

impl ContentItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Read-only content exposed to a screen.
pub trait Model {
    fn content(&self) -> &str;
}

macro_rules! screen_model {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub content: String,
        }

        impl Model for $name {
            fn content(&self) -> &str {
                &self.content
            }
        }
    };
}

screen_model!(View1Model);
screen_model!(View2Model);

impl From<ContentItem> for View1Model {
    fn from(item: ContentItem) -> Self {
        Self {
            content: item.content,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    #[serde(rename = "view1")]
    First,
    #[serde(rename = "view2")]
    Second,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::First, Route::Second];

    pub fn name(self) -> &'static str {
        match self {
            Route::First => "view1",
            Route::Second => "view2",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.name())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().trim_start_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "view1" | "first" => Ok(Route::First),
            "view2" | "second" => Ok(Route::Second),
            _ => Err(AppError::UnknownRoute(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_are_prefixed_names() {
        assert_eq!(Route::First.path(), "/view1");
        assert_eq!(Route::Second.path(), "/view2");
    }

    #[test]
    fn parses_names_paths_and_aliases() {
        assert_eq!("view1".parse::<Route>().expect("route"), Route::First);
        assert_eq!("/view2".parse::<Route>().expect("route"), Route::Second);
        assert_eq!(" Second ".parse::<Route>().expect("route"), Route::Second);
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().expect("route"), route);
        }
    }

    #[test]
    fn rejects_unknown_route() {
        let err = "/settings".parse::<Route>().expect_err("should fail");
        assert!(matches!(err, AppError::UnknownRoute(ref raw) if raw == "/settings"));
    }

    #[test]
    fn route_serializes_as_view_name() {
        let json = serde_json::to_string(&Route::Second).expect("json");
        assert_eq!(json, "\"view2\"");
        let back: Route = serde_json::from_str("\"view1\"").expect("route");
        assert_eq!(back, Route::First);
    }

    #[test]
    fn view1_model_wraps_item_content() {
        let model = View1Model::from(ContentItem::new(DEFAULT_CONTENT_PREFIX));
        assert_eq!(model.content(), DEFAULT_CONTENT_PREFIX);
    }
}
