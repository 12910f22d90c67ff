//! Pagination extractors
//!
//! Page-number pagination from `?page=&per_page=`. Defaults and the upper bound
//! come from the pagination config.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use board_core::PageRequest;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Fill in defaults, then clamp `per_page` to `1..=max`
    pub fn resolve(&self, default_per_page: u32, max_per_page: u32) -> PageRequest {
        let per_page = self.per_page.unwrap_or(default_per_page).min(max_per_page);
        PageRequest::new(self.page.unwrap_or(1), per_page)
    }
}

/// Resolved page request for message, comment and user listings
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let app_state = AppState::from_ref(state);
        let config = &app_state.config().pagination;
        Ok(Pagination(
            params.resolve(config.default_per_page, config.max_per_page),
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
struct NotificationParams {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    per_page: Option<u32>,
    #[serde(default)]
    unread_only: bool,
}

/// Notification listing query: page plus the `unread_only` filter
#[derive(Debug, Clone, Copy)]
pub struct NotificationQuery {
    pub page: PageRequest,
    pub unread_only: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for NotificationQuery
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<NotificationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let app_state = AppState::from_ref(state);
        let config = &app_state.config().pagination;
        let page = PageParams {
            page: params.page,
            per_page: params.per_page,
        }
        .resolve(config.notifications_per_page, config.max_per_page);

        Ok(NotificationQuery {
            page,
            unread_only: params.unread_only,
        })
    }
}
