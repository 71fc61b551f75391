use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::debug;

use super::{now, SearchForm};
use crate::app::{Flash, FormFields, VenueForm};
use crate::error::{AppError, AppResult};
use crate::http::AppState;
use crate::ui::screens::venues;

pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let areas = state.directory.venue_areas().await?;
    Ok(Html(venues::index(&areas, Some(&flash))))
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let results = state.directory.search_venues(&form.search_term).await?;
    Ok(Html(venues::search(&results, &form.search_term)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let detail = state.directory.venue_detail(venue_id, now()).await?;
    Ok(Html(venues::detail(&detail, Some(&flash))))
}

pub async fn create_form() -> Html<String> {
    Html(venues::form(&VenueForm::default(), None, None))
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = VenueForm::from_fields(&FormFields::new(pairs));
    let params = match form.validate() {
        Ok(params) => params,
        Err(errors) => {
            debug!(%errors, "venue form rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(venues::form(&form, None, Some(&errors))),
            )
                .into_response();
        }
    };

    let flash = match state.directory.create_venue(&params).await {
        Ok(_) => Flash::success(format!("Venue {} was successfully listed!", params.name)),
        Err(_) => Flash::error(format!(
            "An error occurred. Venue {} could not be listed.",
            params.name
        )),
    };
    flash.redirect_to("/").into_response()
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> AppResult<Html<String>> {
    let venue = state.directory.venue(venue_id).await?;
    Ok(Html(venues::form(
        &VenueForm::from_record(&venue),
        Some(venue_id),
        None,
    )))
}

/// Always lands back on the detail page; the outcome travels as a flash message.
pub async fn edit(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    let form = VenueForm::from_fields(&FormFields::new(pairs));
    let outcome = match form.validate() {
        Ok(params) => state.directory.update_venue(venue_id, &params).await,
        Err(errors) => Err(AppError::Validation(errors)),
    };
    let flash = match outcome {
        Ok(()) => Flash::success("Venue info updated successfully!"),
        Err(AppError::Validation(errors)) => {
            debug!(venue_id, %errors, "venue edit rejected");
            Flash::error(format!("Venue info was not updated. {errors}"))
        }
        Err(AppError::NotFound { .. }) => Flash::error("Venue not found."),
        Err(AppError::Persistence(_)) => {
            Flash::error("An error occurred when trying to update Venue info!")
        }
    };
    flash.redirect_to(&format!("/venues/{venue_id}"))
}

pub async fn delete(State(state): State<AppState>, Path(venue_id): Path<i64>) -> Redirect {
    let flash = match state.directory.delete_venue(venue_id).await {
        Ok(()) => Flash::success("Venue successfully deleted."),
        Err(AppError::NotFound { .. }) => Flash::error("Venue not found."),
        Err(_) => Flash::error("An error occurred. Venue could not be deleted."),
    };
    flash.redirect_to("/")
}
