use crate::v1::error::ErrorMessage;
use axum::extract::{FromRequestParts, Query};
use axum::http::StatusCode;
use axum::http::request::Parts;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilter {
    #[serde(default)]
    query: String,
    #[serde(default)]
    min_free: u32,
}

/// `?query=&minFree=` search controls. Both are optional; the defaults match everything.
#[derive(Debug, Clone, Default)]
pub struct FacilityFilter {
    pub query: String,
    pub min_free: u32,
}

impl<S> FromRequestParts<S> for FacilityFilter
where
    S: Send + Sync,
{
    type Rejection = ErrorMessage;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawFilter>::from_request_parts(parts, state)
            .await
            .map_err(|e| ErrorMessage::from((StatusCode::BAD_REQUEST, e.body_text())))?;

        Ok(Self {
            query: params.query,
            min_free: params.min_free,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawTopCount {
    n: Option<usize>,
}

/// Optional `?n=` for ranking endpoints; `None` means the configured default.
#[derive(Debug, Clone, Copy)]
pub struct TopCount(pub Option<usize>);

impl<S> FromRequestParts<S> for TopCount
where
    S: Send + Sync,
{
    type Rejection = ErrorMessage;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawTopCount>::from_request_parts(parts, state)
            .await
            .map_err(|e| ErrorMessage::from((StatusCode::BAD_REQUEST, e.body_text())))?;

        Ok(Self(params.n))
    }
}
