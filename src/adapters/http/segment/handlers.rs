//! HTTP handlers for segment endpoints.
//!
//! These handlers connect Axum routes to the segment query and command
//! handlers. Failures are logged under an operation label before being
//! turned into the error envelope.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, warn};

use crate::application::handlers::{
    CountSegmentsHandler, GetSegmentGenderDataHandler, GetSegmentGenderDataQuery,
    GetSegmentHandler, GetSegmentQuery, ListSegmentMetadataHandler, ListSegmentMetadataQuery,
    SegmentQuerySettings, UpdateSegmentCommand, UpdateSegmentHandler,
};
use crate::domain::foundation::{Pagination, SegmentId};
use crate::ports::{SegmentError, SegmentReader};

use super::dto::{
    ErrorResponse, ListSegmentsParams, Segment, SegmentCountResponse, SegmentGenderData,
    SegmentMetaData, SuccessResponse, UpdateSegmentRequest,
};

const LIST_LABEL: &str = "Get Segment List Error";
const COUNT_LABEL: &str = "Get Segment Count Error";
const GET_LABEL: &str = "Get Segment by id error";
const UPDATE_LABEL: &str = "Update Segment by id error";
const GENDER_LABEL: &str = "Segment gender data error";

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Segment API error that implements IntoResponse.
#[derive(Debug)]
pub struct SegmentApiError {
    label: &'static str,
    status: StatusCode,
    body: ErrorResponse,
}

impl SegmentApiError {
    pub fn new(label: &'static str, error: SegmentError) -> Self {
        let message = error.to_string();
        let (status, body) = match error {
            SegmentError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(message)),
            SegmentError::InvalidInput(_) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            SegmentError::NotImplemented(_) => (
                StatusCode::NOT_IMPLEMENTED,
                ErrorResponse::not_implemented(message),
            ),
            SegmentError::Timeout(_) => {
                (StatusCode::GATEWAY_TIMEOUT, ErrorResponse::timeout(message))
            }
            SegmentError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(message),
            ),
        };
        Self {
            label,
            status,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for SegmentApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            error!(
                status = self.status.as_u16(),
                code = %self.body.code,
                error = %self.body.error,
                "{}",
                self.label
            );
        } else {
            warn!(
                status = self.status.as_u16(),
                code = %self.body.code,
                error = %self.body.error,
                "{}",
                self.label
            );
        }
        (self.status, Json(self.body)).into_response()
    }
}

fn parse_segment_id(label: &'static str, raw: &str) -> Result<SegmentId, SegmentApiError> {
    raw.parse::<SegmentId>()
        .map_err(|e| SegmentApiError::new(label, SegmentError::InvalidInput(e.to_string())))
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing segment dependencies.
#[derive(Clone)]
pub struct SegmentAppState {
    pub segment_reader: Arc<dyn SegmentReader>,
    pub settings: SegmentQuerySettings,
}

impl SegmentAppState {
    pub fn new(segment_reader: Arc<dyn SegmentReader>, settings: SegmentQuerySettings) -> Self {
        Self {
            segment_reader,
            settings,
        }
    }

    pub fn list_segment_metadata_handler(&self) -> ListSegmentMetadataHandler {
        ListSegmentMetadataHandler::new(self.segment_reader.clone(), self.settings)
    }

    pub fn count_segments_handler(&self) -> CountSegmentsHandler {
        CountSegmentsHandler::new(self.segment_reader.clone(), self.settings)
    }

    pub fn get_segment_handler(&self) -> GetSegmentHandler {
        GetSegmentHandler::new(self.segment_reader.clone(), self.settings)
    }

    pub fn get_segment_gender_data_handler(&self) -> GetSegmentGenderDataHandler {
        GetSegmentGenderDataHandler::new(self.segment_reader.clone(), self.settings)
    }

    pub fn update_segment_handler(&self) -> UpdateSegmentHandler {
        UpdateSegmentHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/segments?page=&limit=
pub async fn list_segments(
    State(state): State<SegmentAppState>,
    Query(params): Query<ListSegmentsParams>,
) -> Result<Json<SuccessResponse<Vec<SegmentMetaData>>>, SegmentApiError> {
    let pagination = Pagination::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.settings.default_pagination,
    );

    let result = state
        .list_segment_metadata_handler()
        .handle(ListSegmentMetadataQuery { pagination })
        .await
        .map_err(|e| SegmentApiError::new(LIST_LABEL, e))?;

    Ok(Json(SuccessResponse::with_total_count(
        result.segments,
        result.total_count,
    )))
}

/// GET /api/segments/count
pub async fn count_segments(
    State(state): State<SegmentAppState>,
) -> Result<Json<SuccessResponse<SegmentCountResponse>>, SegmentApiError> {
    let total_count = state
        .count_segments_handler()
        .handle()
        .await
        .map_err(|e| SegmentApiError::new(COUNT_LABEL, e))?;

    Ok(Json(SuccessResponse::new(SegmentCountResponse { total_count })))
}

/// GET /api/segments/:id
pub async fn get_segment(
    State(state): State<SegmentAppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<Segment>>, SegmentApiError> {
    let segment_id = parse_segment_id(GET_LABEL, &id)?;

    let segment = state
        .get_segment_handler()
        .handle(GetSegmentQuery { segment_id })
        .await
        .map_err(|e| SegmentApiError::new(GET_LABEL, e))?;

    Ok(Json(SuccessResponse::new(segment)))
}

/// PUT /api/segments/:id
///
/// The body is optional and unvalidated; the update path answers 501.
pub async fn update_segment(
    State(state): State<SegmentAppState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateSegmentRequest>>,
) -> Result<StatusCode, SegmentApiError> {
    let segment_id = parse_segment_id(UPDATE_LABEL, &id)?;
    let request = body.map(|Json(request)| request).unwrap_or_default();

    state
        .update_segment_handler()
        .handle(UpdateSegmentCommand {
            segment_id,
            name: request.name,
        })
        .await
        .map_err(|e| SegmentApiError::new(UPDATE_LABEL, e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/segments/:id/gender-data
pub async fn get_segment_gender_data(
    State(state): State<SegmentAppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse<Vec<SegmentGenderData>>>, SegmentApiError> {
    let segment_id = parse_segment_id(GENDER_LABEL, &id)?;

    let breakdown = state
        .get_segment_gender_data_handler()
        .handle(GetSegmentGenderDataQuery { segment_id })
        .await
        .map_err(|e| SegmentApiError::new(GENDER_LABEL, e))?;

    Ok(Json(SuccessResponse::new(breakdown)))
}
