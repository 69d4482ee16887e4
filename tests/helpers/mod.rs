pub mod post_helpers;
pub mod test_with_server;

use axum_test::TestResponse;
use feed_server::middleware::error::ErrorResponseBody;
use feed_server::models::view::rpc::RpcResponse;
use serde::de::DeserializeOwned;

pub const AVATAR_URL: &str = "https://i.pravatar.cc/150?img=12";
pub const IMAGE_URL: &str = "https://picsum.photos/id/237/600/600";

#[allow(dead_code)]
pub fn rpc_path(procedure: &str) -> String {
    format!("/trpc/{procedure}")
}

#[allow(dead_code)]
pub fn rpc_data<T: DeserializeOwned>(response: &TestResponse) -> T {
    response.json::<RpcResponse<T>>().into_data()
}

#[allow(dead_code)]
pub fn rpc_error(response: &TestResponse) -> ErrorResponseBody {
    response.json::<ErrorResponseBody>()
}
