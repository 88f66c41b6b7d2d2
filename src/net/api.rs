//! REST helpers for the recommendation API.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: stubs returning `ClientError::Network`, since these
//! endpoints are only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and undecodable bodies are `ClientError::Network`. A
//! recommendations body with `success: false` is `ClientError::Api` carrying
//! the server's message, whatever the HTTP status. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MovieDetail, MovieSummary, RecommendationsResponse};
use crate::error::{ClientError, ClientResult};

/// Shown when the API rejects a title without saying why.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

#[cfg(any(test, feature = "csr"))]
fn search_endpoint(base: &str, query: &str) -> String {
    format!("{base}/api/search/?q={}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "csr"))]
fn recommendations_endpoint(base: &str, movie: &str) -> String {
    format!("{base}/api/recommendations/?movie={}", urlencoding::encode(movie))
}

#[cfg(any(test, feature = "csr"))]
fn movie_detail_endpoint(base: &str, id: i64) -> String {
    format!("{base}/api/movie/{id}/")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Interpret a decoded recommendations body.
///
/// # Errors
///
/// Returns `ClientError::Api` when the body reports failure.
pub fn recommendations_result(body: RecommendationsResponse) -> ClientResult<Vec<MovieSummary>> {
    if body.success {
        Ok(body.recommendations)
    } else {
        let message = body
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| MOVIE_NOT_FOUND.to_owned());
        Err(ClientError::Api(message))
    }
}

/// Title suggestions for a partial query via `GET /api/search/?q=`.
///
/// # Errors
///
/// Returns `ClientError::Network` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn search_titles(base: &str, query: &str) -> ClientResult<Vec<String>> {
    #[cfg(feature = "csr")]
    {
        let url = search_endpoint(base, query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Network(request_failed_message("search", resp.status())));
        }
        let body: super::types::SearchResponse = resp.json().await.map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(body.results)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, query);
        Err(ClientError::Network("not available outside the browser".to_owned()))
    }
}

/// Recommendations for a title via `GET /api/recommendations/?movie=`.
///
/// # Errors
///
/// Returns `ClientError::Api` when the server reports failure, and
/// `ClientError::Network` on transport failure or an undecodable body.
pub async fn fetch_recommendations(base: &str, movie: &str) -> ClientResult<Vec<MovieSummary>> {
    #[cfg(feature = "csr")]
    {
        let url = recommendations_endpoint(base, movie);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status();
        let body: RecommendationsResponse = resp.json().await.map_err(|e| {
            if (200..300).contains(&status) {
                ClientError::Network(e.to_string())
            } else {
                ClientError::Network(request_failed_message("recommendations", status))
            }
        })?;
        recommendations_result(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, movie);
        Err(ClientError::Network("not available outside the browser".to_owned()))
    }
}

/// Full record for the detail modal via `GET /api/movie/{id}/`.
///
/// # Errors
///
/// Returns `ClientError::Network` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_movie_detail(base: &str, id: i64) -> ClientResult<MovieDetail> {
    #[cfg(feature = "csr")]
    {
        let url = movie_detail_endpoint(base, id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ClientError::Network(request_failed_message("movie detail", resp.status())));
        }
        resp.json::<MovieDetail>().await.map_err(|e| ClientError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, id);
        Err(ClientError::Network("not available outside the browser".to_owned()))
    }
}
