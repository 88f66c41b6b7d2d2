use super::*;

fn summary(id: i64) -> MovieSummary {
    MovieSummary {
        id,
        title: format!("Movie {id}"),
        poster: String::new(),
        rating: None,
        release_date: None,
        runtime: None,
        genres: Vec::new(),
        overview: None,
        similarity: Some(50.0),
    }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn search_endpoint_encodes_query() {
    assert_eq!(search_endpoint("", "star wars"), "/api/search/?q=star%20wars");
}

#[test]
fn recommendations_endpoint_encodes_title() {
    assert_eq!(
        recommendations_endpoint("https://api.test", "Amélie & Co"),
        "https://api.test/api/recommendations/?movie=Am%C3%A9lie%20%26%20Co"
    );
}

#[test]
fn movie_detail_endpoint_has_trailing_slash() {
    assert_eq!(movie_detail_endpoint("", 27205), "/api/movie/27205/");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("movie detail", 404), "movie detail request failed: 404");
}

// =============================================================
// recommendations_result
// =============================================================

#[test]
fn success_yields_movies_in_order() {
    let body = RecommendationsResponse { success: true, recommendations: vec![summary(2), summary(1)], error: None };
    let ids: Vec<i64> = recommendations_result(body).unwrap_or_default().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn failure_carries_server_message() {
    let body = RecommendationsResponse { success: false, recommendations: Vec::new(), error: Some("No match for 'zzz'".to_owned()) };
    assert_eq!(recommendations_result(body), Err(ClientError::Api("No match for 'zzz'".to_owned())));
}

#[test]
fn failure_without_message_says_not_found() {
    let body = RecommendationsResponse { success: false, recommendations: Vec::new(), error: None };
    assert_eq!(recommendations_result(body), Err(ClientError::Api(MOVIE_NOT_FOUND.to_owned())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_stub_reports_network_error() {
    let result = block_on(search_titles("", "up"));
    assert!(matches!(result, Err(ClientError::Network(_))));
}

/// Minimal executor for stubs that never suspend.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future suspended"),
    }
}
