use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns an `Error` stored in the response extensions into the JSON error body the client sees,
/// and logs every request.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let request_id = resp.headers().get(REQUEST_ID_HEADER).cloned();
    let uuid = request_id
        .as_ref()
        .and_then(|id| id.to_str().ok())
        .and_then(|id| Uuid::parse_str(id).ok())
        .unwrap_or_else(Uuid::new_v4);

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({
            "error": {
                "message": cl_err.to_string(),
                "data": {
                    "req_id": uuid.to_string(),
                    "detail": cl_err.detail(),
                }
            }
        });

        let mut err_resp = (*status, Json(client_error_body)).into_response();
        if let Some(request_id) = request_id {
            err_resp.headers_mut().insert(REQUEST_ID_HEADER, request_id);
        }
        err_resp
    });

    log::log_request(
        uuid,
        &req_method,
        &uri,
        err_resp.as_ref().map_or(resp.status(), Response::status),
        web_error,
        client_status_and_error.as_ref().map(|(_, ce)| ce),
    );

    err_resp.unwrap_or(resp)
}
