use serde::{Deserialize, Serialize};

/// Success envelope of every procedure: `{"result":{"data": ...}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub result: RpcResult<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResult<T> {
    pub data: T,
}

impl<T> RpcResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            result: RpcResult { data },
        }
    }

    pub fn into_data(self) -> T {
        self.result.data
    }
}
