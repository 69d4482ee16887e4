use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::Method;
use axum::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError};

const EMPTY_INPUT: &str = "{}";

#[derive(Debug, Deserialize)]
struct RpcQuery {
    input: Option<String>,
}

/// Decoded and validated procedure input.
///
/// `GET` reads JSON from the `input` query parameter, any other method reads the JSON body.
/// A missing input decodes as `{}` so absent fields surface as validation errors.
#[derive(Debug)]
pub struct RpcInput<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RpcInput<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = CtxError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let ctx = Ctx::from_request_parts(&mut parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let payload: T = if parts.method == Method::GET {
            let Query(query) = Query::<RpcQuery>::from_request_parts(&mut parts, state)
                .await
                .map_err(CtxError::from(&ctx))?;
            serde_json::from_str(query.input.as_deref().unwrap_or(EMPTY_INPUT))
                .map_err(CtxError::from(&ctx))?
        } else {
            let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
                .await
                .map_err(|err| ctx.to_ctx_error(AppError::validation(err.body_text())))?;
            if bytes.is_empty() {
                serde_json::from_str(EMPTY_INPUT).map_err(CtxError::from(&ctx))?
            } else {
                serde_json::from_slice(&bytes).map_err(CtxError::from(&ctx))?
            }
        };

        payload.validate().map_err(CtxError::from(&ctx))?;
        Ok(Self(payload))
    }
}
