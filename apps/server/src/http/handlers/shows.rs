use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use tracing::debug;

use crate::app::{Flash, FormFields, ShowForm};
use crate::error::AppResult;
use crate::http::AppState;
use crate::ui::screens::shows;

pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> AppResult<Html<String>> {
    let listings = state.directory.shows().await?;
    Ok(Html(shows::index(&listings, Some(&flash))))
}

pub async fn create_form() -> Html<String> {
    Html(shows::form(&ShowForm::blank(), None))
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ShowForm::from_fields(&FormFields::new(pairs));
    let params = match form.validate() {
        Ok(params) => params,
        Err(errors) => {
            debug!(%errors, "show form rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(shows::form(&form, Some(&errors))),
            )
                .into_response();
        }
    };

    // Unknown artist or venue ids surface here as foreign key violations
    let flash = match state.directory.create_show(&params).await {
        Ok(()) => Flash::success("Show was successfully listed!"),
        Err(_) => Flash::error("An error occurred. Show could not be listed."),
    };
    flash.redirect_to("/").into_response()
}
