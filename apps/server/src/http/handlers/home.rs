use axum::extract::{Query, State};
use axum::response::Html;

use crate::app::Flash;
use crate::error::AppResult;
use crate::http::AppState;
use crate::ui::screens::home;

const RECENT_LIMIT: i64 = 10;

pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let listings = state.directory.recent_listings(RECENT_LIMIT).await?;
    Ok(Html(home::render(&listings, Some(&flash))))
}
