//! HTTP surface: routes, handlers and the rendered error pages.

pub mod handlers;

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::map_response;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::app::Directory;
use crate::error::AppError;
use crate::ui::screens::errors;

/// State handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: Directory,
}

impl AppState {
    pub const fn new(directory: Directory) -> Self {
        Self { directory }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        // Venues
        .route("/venues", get(handlers::venues::index))
        .route("/venues/search", post(handlers::venues::search))
        .route(
            "/venues/create",
            get(handlers::venues::create_form).post(handlers::venues::create),
        )
        .route(
            "/venues/:venue_id",
            get(handlers::venues::show)
                .post(handlers::venues::delete)
                .delete(handlers::venues::delete),
        )
        .route(
            "/venues/:venue_id/edit",
            get(handlers::venues::edit_form).post(handlers::venues::edit),
        )
        // Artists
        .route("/artists", get(handlers::artists::index))
        .route("/artists/search", post(handlers::artists::search))
        .route(
            "/artists/create",
            get(handlers::artists::create_form).post(handlers::artists::create),
        )
        .route("/artists/:artist_id", get(handlers::artists::show))
        .route(
            "/artists/:artist_id/edit",
            get(handlers::artists::edit_form).post(handlers::artists::edit),
        )
        // Shows
        .route("/shows", get(handlers::shows::index))
        .route(
            "/shows/create",
            get(handlers::shows::create_form).post(handlers::shows::create),
        )
        .fallback(not_found)
        .layer(map_response(render_error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn is_html(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

fn error_page(status: StatusCode) -> Response {
    (status, Html(errors::render(status))).into_response()
}

/// Swaps plain-text and empty error bodies (extractor rejections, unknown
/// routes, wrong methods) for the rendered page of the same status. Other
/// headers, such as `Allow` on a 405, are kept.
async fn render_error_pages(response: Response) -> Response {
    let status = response.status();
    if !errors::RENDERED.contains(&status) || is_html(&response) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    Response::from_parts(parts, Body::from(errors::render(status)))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } => {
                warn!(error = %self, "not found");
                error_page(StatusCode::NOT_FOUND)
            }
            Self::Validation(errors) => {
                warn!(%errors, "unprocessable submission");
                error_page(StatusCode::UNPROCESSABLE_ENTITY)
            }
            Self::Persistence(e) => {
                error!(error = %e, "storage failure");
                error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
