//! HTTP rendering of service outcomes

use axum::{
    Json as AxumJson,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::ServiceResponse;

impl<T> IntoResponse for ServiceResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 204 must not carry a body.
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        (status, AxumJson(self)).into_response()
    }
}
