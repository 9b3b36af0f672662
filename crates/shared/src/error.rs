use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    EmptyStore,
    EmptyContent,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("item store is empty; no current item")]
    EmptyStore,
    #[error("view2 content list is empty")]
    EmptyView2Content,
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::EmptyStore => ErrorCode::EmptyStore,
            AppError::EmptyView2Content => ErrorCode::EmptyContent,
            AppError::UnknownRoute(_) => ErrorCode::Validation,
        }
    }
}
