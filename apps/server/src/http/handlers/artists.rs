use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::debug;

use super::{now, SearchForm};
use crate::app::{ArtistForm, Flash, FormFields};
use crate::error::{AppError, AppResult};
use crate::http::AppState;
use crate::ui::screens::artists;

pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let all = state.directory.artists().await?;
    Ok(Html(artists::index(&all, Some(&flash))))
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let results = state.directory.search_artists(&form.search_term).await?;
    Ok(Html(artists::search(&results, &form.search_term)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let detail = state.directory.artist_detail(artist_id, now()).await?;
    Ok(Html(artists::detail(&detail, Some(&flash))))
}

pub async fn create_form() -> Html<String> {
    Html(artists::form(&ArtistForm::default(), None, None))
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ArtistForm::from_fields(&FormFields::new(pairs));
    let params = match form.validate() {
        Ok(params) => params,
        Err(errors) => {
            debug!(%errors, "artist form rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(artists::form(&form, None, Some(&errors))),
            )
                .into_response();
        }
    };

    let flash = match state.directory.create_artist(&params).await {
        Ok(_) => Flash::success(format!("Artist {} was successfully listed!", params.name)),
        Err(_) => Flash::error(format!(
            "An error occurred. Artist {} could not be listed.",
            params.name
        )),
    };
    flash.redirect_to("/").into_response()
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> AppResult<Html<String>> {
    let artist = state.directory.artist(artist_id).await?;
    Ok(Html(artists::form(
        &ArtistForm::from_record(&artist),
        Some(artist_id),
        None,
    )))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    let form = ArtistForm::from_fields(&FormFields::new(pairs));
    let outcome = match form.validate() {
        Ok(params) => state.directory.update_artist(artist_id, &params).await,
        Err(errors) => Err(AppError::Validation(errors)),
    };
    let flash = match outcome {
        Ok(()) => Flash::success("Artist info updated successfully!"),
        Err(AppError::Validation(errors)) => {
            debug!(artist_id, %errors, "artist edit rejected");
            Flash::error(format!("Artist info was not updated. {errors}"))
        }
        Err(AppError::NotFound { .. }) => Flash::error("Artist not found."),
        Err(AppError::Persistence(_)) => {
            Flash::error("An error occurred when trying to update Artist info!")
        }
    };
    flash.redirect_to(&format!("/artists/{artist_id}"))
}
