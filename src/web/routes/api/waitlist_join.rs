use axum::{extract::State, Json};

use crate::{
    waitlist::{self, JoinWaitlistInput, WaitlistResponse},
    web::WebResult,
    AppState,
};

/// Both a new signup and a duplicate email answer with `200 OK`; `success` tells them apart.
#[tracing::instrument(name = "api_waitlist_join", skip_all)]
pub async fn waitlist_join(
    State(app_state): State<AppState>,
    Json(input): Json<JoinWaitlistInput>,
) -> WebResult<Json<WaitlistResponse>> {
    let res = waitlist::join_waitlist(app_state.store.as_ref(), input).await?;

    Ok(Json(res))
}
