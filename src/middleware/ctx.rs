use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::{AppError, CtxError};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context. Carries the id every log line and error body refers to.
#[derive(Clone, Debug)]
pub struct Ctx {
    req_id: Uuid,
}

impl Ctx {
    pub fn new(req_id: Uuid) -> Self {
        Self { req_id }
    }

    pub fn req_id(&self) -> Uuid {
        self.req_id
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError {
            req_id: self.req_id,
            error,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<Ctx>() {
            return Ok(ctx.clone());
        }

        // honour an upstream request id when it parses, otherwise mint one
        let req_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .unwrap_or_else(Uuid::new_v4);

        let ctx = Ctx::new(req_id);
        parts.extensions.insert(ctx.clone());
        Ok(ctx)
    }
}
