use axum::{extract::State, Json};

use crate::{
    waitlist::{self, WaitlistCount},
    web::WebResult,
    AppState,
};

#[tracing::instrument(name = "api_waitlist_count", skip_all)]
pub async fn waitlist_count(State(app_state): State<AppState>) -> WebResult<Json<WaitlistCount>> {
    let count = waitlist::waitlist_count(app_state.store.as_ref()).await?;

    Ok(Json(count))
}
