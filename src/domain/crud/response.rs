//! Service-boundary outcome type

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(total_count: u64, page: u64, page_size: u64) -> Self {
        Self {
            total_count,
            page,
            page_size,
            total_pages: total_count.div_ceil(page_size.max(1)),
        }
    }
}

/// Outcome of an entity service call
///
/// Not-found and business-rule failures are regular outcomes; storage and
/// cache failures surface as `InternalError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ServiceResponse<T> {
    Ok {
        data: T,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pagination: Option<Pagination>,
    },
    Created {
        data: T,
        message: String,
    },
    NoContent {
        message: String,
    },
    NotFound {
        message: String,
    },
    BadRequest {
        message: String,
        #[serde(default)]
        errors: Vec<String>,
    },
    InternalError {
        message: String,
    },
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::Ok {
            data,
            message: message.into(),
            pagination: None,
        }
    }

    pub fn ok_paged(data: T, message: impl Into<String>, pagination: Pagination) -> Self {
        Self::Ok {
            data,
            message: message.into(),
            pagination: Some(pagination),
        }
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::Created {
            data,
            message: message.into(),
        }
    }

    pub fn no_content(message: impl Into<String>) -> Self {
        Self::NoContent {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            errors,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// True for `Ok`, `Created` and `NoContent`
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Ok { .. } | Self::Created { .. } | Self::NoContent { .. }
        )
    }

    /// HTTP status code conventionally associated with the outcome
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Ok { .. } => 200,
            Self::Created { .. } => 201,
            Self::NoContent { .. } => 204,
            Self::NotFound { .. } => 404,
            Self::BadRequest { .. } => 400,
            Self::InternalError { .. } => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Ok { message, .. }
            | Self::Created { message, .. }
            | Self::NoContent { message }
            | Self::NotFound { message }
            | Self::BadRequest { message, .. }
            | Self::InternalError { message } => message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ok { data, .. } | Self::Created { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ok { data, .. } | Self::Created { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            Self::Ok { pagination, .. } => pagination.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_total_pages() {
        assert_eq!(Pagination::new(0, 1, 10).total_pages, 0);
        assert_eq!(Pagination::new(10, 1, 10).total_pages, 1);
        assert_eq!(Pagination::new(21, 3, 10).total_pages, 3);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceResponse::ok(1, "ok").status_code(), 200);
        assert_eq!(ServiceResponse::created(1, "created").status_code(), 201);
        assert_eq!(ServiceResponse::<()>::no_content("gone").status_code(), 204);
        assert_eq!(ServiceResponse::<()>::not_found("missing").status_code(), 404);
        assert_eq!(ServiceResponse::<()>::bad_request("bad", vec![]).status_code(), 400);
        assert_eq!(ServiceResponse::<()>::internal_error("boom").status_code(), 500);
    }

    #[test]
    fn test_serialization_is_tagged() {
        let response = ServiceResponse::ok_paged(vec![1, 2], "listed", Pagination::new(2, 1, 10));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["outcome"], "ok");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["pagination"]["total_pages"], 1);

        let back: ServiceResponse<Vec<i32>> = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_bad_request_carries_errors() {
        let response: ServiceResponse<()> =
            ServiceResponse::bad_request("Validation failed", vec!["name: required".into()]);

        assert!(!response.is_success());
        assert_eq!(response.message(), "Validation failed");
        assert!(response.data().is_none());
    }
}
