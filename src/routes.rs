// Route definitions

use std::convert::Infallible;
use std::future::Future;

use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use warp::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, VARY,
};
use warp::http::{HeaderMap, Method, StatusCode};
use warp::{Filter, Reply};

use crate::error::handle_rejection;
use crate::handlers;
use crate::models::HistoryQuery;
use crate::state::AppState;

/// Largest accepted JSON body
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Methods advertised to CORS preflights
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// Serve the API on `listener` until `shutdown` resolves
///
/// Connections already accepted are allowed to finish before this returns.
pub async fn serve<S>(listener: TcpListener, state: AppState, shutdown: S)
where
    S: Future<Output = ()> + Send + 'static,
{
    warp::serve(configure_routes(state))
        .incoming(listener)
        .graceful(shutdown)
        .run()
        .await;
}

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /api/chat
    let chat = warp::path!("api" / "chat")
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(json_body())
        .and_then(handlers::chat_handler);

    // GET /api/chat/history?user_id=&limit=
    let history = warp::path!("api" / "chat" / "history")
        .and(warp::get())
        .and(with_state(state.clone()))
        .and(warp::query::<HistoryQuery>())
        .and_then(handlers::history_handler);

    // POST /api/signup
    let signup = warp::path!("api" / "signup")
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(json_body())
        .and_then(handlers::signup_handler);

    // POST /api/login
    let login = warp::path!("api" / "login")
        .and(warp::post())
        .and(with_state(state))
        .and(json_body())
        .and_then(handlers::login_handler);

    preflight()
        .or(chat)
        .or(history)
        .or(signup)
        .or(login)
        .recover(handle_rejection)
        .with(warp::reply::with::header(ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .with(warp::log::custom(|info| {
            tracing::info!(
                method = %info.method(),
                path = info.path(),
                status = info.status().as_u16(),
                elapsed_ms = info.elapsed().as_millis() as u64,
                "Handled request"
            );
        }))
}

// OPTIONS with Access-Control-Request-Method, on any path
fn preflight() -> impl Filter<Extract = (warp::reply::Response,), Error = warp::Rejection> + Clone {
    warp::method()
        .and(warp::header::headers_cloned())
        .and_then(|method: Method, headers: HeaderMap| async move {
            if method == Method::OPTIONS && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD) {
                Ok(preflight_response(&headers))
            } else {
                Err(warp::reject::not_found())
            }
        })
}

/// Allow any origin and method, and echo back whatever headers were asked for
pub fn preflight_response(request_headers: &HeaderMap) -> warp::reply::Response {
    let mut response = warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response();
    let headers = response.headers_mut();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    if let Some(requested) = request_headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("600"));
    headers.insert(
        VARY,
        HeaderValue::from_static("access-control-request-headers"),
    );

    response
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}
