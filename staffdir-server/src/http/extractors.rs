//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use staffdir_core::PageRequest;

/// Raw `page` query value, passed through untouched for the resolver.
///
/// When `page` repeats, the last value wins. Never rejects: an unparseable
/// query string counts as no page at all.
pub struct PageParam(pub PageRequest);

impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs
                .into_iter()
                .filter(|(key, _)| key == "page")
                .map(|(_, value)| value)
                .last(),
            Err(rejection) => {
                tracing::debug!(%rejection, "ignoring malformed query string");
                None
            }
        };

        Ok(Self(PageRequest::from(raw)))
    }
}
