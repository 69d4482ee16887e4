use crate::config::AppConfig;
use crate::database::client::Database;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub struct CtxState {
    pub db: Database,
    pub rpc_prefix: String,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CtxState")
            .field("rpc_prefix", &self.rpc_prefix)
            .finish_non_exhaustive()
    }
}

pub fn create_ctx_state(db: Database, config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        db,
        rpc_prefix: config.rpc_prefix.clone(),
    };
    Arc::new(ctx_state)
}
