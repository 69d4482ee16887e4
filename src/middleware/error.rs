use std::fmt;

use axum::extract::rejection::QueryRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::middleware::ctx::Ctx;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    ValidationFail { description: String },
    EntityFailIdNotFound { entity: String, ident: String },
    ProcedureNotFound { name: String },
}

/// Handler result; the error carries the req_id reported to the client.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Store and entity level result, before a request context is attached.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl AppError {
    pub fn not_found(entity: &str, ident: &str) -> Self {
        Self::EntityFailIdNotFound {
            entity: entity.to_string(),
            ident: ident.to_string(),
        }
    }

    pub fn validation(description: impl Into<String>) -> Self {
        Self::ValidationFail {
            description: description.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ValidationFail { .. } => ErrorCode::BadRequest,
            Self::EntityFailIdNotFound { .. } => ErrorCode::NotFound,
            Self::ProcedureNotFound { .. } => ErrorCode::ProcedureNotFound,
            Self::Generic { .. } => ErrorCode::InternalServerError,
        }
    }
}

impl CtxError {
    pub fn from<T: Into<AppError>>(ctx: &Ctx) -> impl FnOnce(T) -> CtxError + '_ {
        |err| CtxError {
            req_id: ctx.req_id(),
            error: err.into(),
        }
    }
}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

impl From<CtxError> for AppError {
    fn from(value: CtxError) -> Self {
        value.error
    }
}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { .. } => write!(f, "{INTERNAL}"),
            Self::ValidationFail { description } => write!(f, "{description}"),
            Self::EntityFailIdNotFound { entity, ident } => {
                write!(f, "{entity} id= {ident} not found")
            }
            Self::ProcedureNotFound { name } => write!(f, "No procedure named {name}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    ProcedureNotFound,
    InternalServerError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound | ErrorCode::ProcedureNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
    pub req_id: String,
}

impl ErrorResponseBody {
    pub fn new(code: ErrorCode, message: String, req_id: Option<String>) -> Self {
        ErrorResponseBody {
            error: ErrorDetail {
                code,
                message,
                req_id: req_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            },
        }
    }

    pub fn get_err(&self) -> String {
        self.error.message.clone()
    }
}

impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        let code = self.error.code();
        match code {
            ErrorCode::InternalServerError => {
                tracing::error!(req_id = %self.req_id, error = ?self.error, "request failed")
            }
            _ => warn!(req_id = %self.req_id, error = %self.error, "request rejected"),
        }
        let body = ErrorResponseBody::new(
            code,
            self.error.to_string(),
            Some(self.req_id.to_string()),
        );
        let mut response = (code.status(), Json(body)).into_response();
        // the real error travels with the response for the trace layer
        response.extensions_mut().insert(self.error);
        response
    }
}

// External errors

impl From<ValidationErrors> for AppError {
    fn from(value: ValidationErrors) -> Self {
        Self::ValidationFail {
            description: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::ValidationFail {
            description: format!("Invalid input - {value}"),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Generic {
            description: value.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        Self::ValidationFail {
            description: value.body_text(),
        }
    }
}
