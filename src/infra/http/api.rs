//! The dispatcher endpoint: a putter name in, formatted report markup out.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::application::{error::ErrorReport, research::ResearchError};

use super::public::HttpState;

#[derive(Debug, Deserialize)]
pub struct PutterInfoRequest {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PutterInfoResponse {
    pub response: String,
}

/// Single-message error body; clients surface `error` verbatim.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

pub(super) async fn putter_info(
    State(state): State<HttpState>,
    payload: Result<Json<PutterInfoRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "request body must be JSON with a `name` field".to_string(),
                ErrorReport::from_error(
                    "infra::http::api::putter_info",
                    StatusCode::BAD_REQUEST,
                    &rejection,
                ),
            );
        }
    };

    match state.research.research(&request.name).await {
        Ok(report) => Json(PutterInfoResponse {
            response: report.html,
        })
        .into_response(),
        Err(err) => {
            let status = match &err {
                ResearchError::EmptyName => StatusCode::BAD_REQUEST,
                ResearchError::Upstream(_) => StatusCode::BAD_GATEWAY,
            };
            error_response(
                status,
                err.to_string(),
                ErrorReport::from_error("infra::http::api::putter_info", status, &err),
            )
        }
    }
}

fn error_response(status: StatusCode, message: String, report: ErrorReport) -> Response {
    let mut response = (status, Json(ApiErrorBody { error: message })).into_response();
    report.attach(&mut response);
    response
}
