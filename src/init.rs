use crate::{
    middleware::mw_ctx::CtxState,
    routes::procedures::{self, Procedure, ProcedureKind},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .route("/api/info", get(get_info))
        .nest(&ctx_state.rpc_prefix, procedures::routes())
        .with_state(ctx_state.clone())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn get_hc() -> Response {
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoView {
    pub name: &'static str,
    pub version: &'static str,
    pub rpc_prefix: String,
    pub procedures: Vec<ProcedureInfo>,
}

#[derive(Debug, Serialize)]
pub struct ProcedureInfo {
    pub name: &'static str,
    pub kind: ProcedureKind,
}

async fn get_info(State(state): State<Arc<CtxState>>) -> Json<InfoView> {
    let procedures = Procedure::iter()
        .map(|p| ProcedureInfo {
            name: p.into(),
            kind: p.kind(),
        })
        .collect();

    Json(InfoView {
        name: NAME,
        version: VERSION,
        rpc_prefix: state.rpc_prefix.clone(),
        procedures,
    })
}
