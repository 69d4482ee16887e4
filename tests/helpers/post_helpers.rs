use axum_test::{TestResponse, TestServer};
use fake::{faker, Fake};
use feed_server::entities::feed::post_entity::Post;
use feed_server::models::view::feed::{PostCommentReplyView, PostCommentView};
use serde_json::{json, Value};

use super::{rpc_data, rpc_path, AVATAR_URL, IMAGE_URL};

#[allow(dead_code)]
pub fn fake_username() -> String {
    format!("user_{}", (1000..9999).fake::<u32>())
}

#[allow(dead_code)]
pub fn fake_text() -> String {
    faker::lorem::en::Sentence(3..8).fake::<String>()
}

#[allow(dead_code)]
pub async fn call(server: &TestServer, procedure: &str, input: Value) -> TestResponse {
    server
        .post(rpc_path(procedure).as_str())
        .json(&input)
        .add_header("Accept", "application/json")
        .await
}

#[allow(dead_code)]
pub async fn create_post(server: &TestServer, author: &str, caption: &str) -> TestResponse {
    call(
        server,
        "createPost",
        json!({
            "author": author,
            "avatarUrl": AVATAR_URL,
            "imageUrl": IMAGE_URL,
            "caption": caption,
        }),
    )
    .await
}

#[allow(dead_code)]
pub async fn create_fake_post(server: &TestServer) -> Post {
    let response = create_post(server, &fake_username(), &fake_text()).await;
    response.assert_status_ok();
    rpc_data::<Post>(&response)
}

#[allow(dead_code)]
pub async fn list_posts(server: &TestServer) -> Vec<Post> {
    let response = server
        .get(rpc_path("listPosts").as_str())
        .add_header("Accept", "application/json")
        .await;
    response.assert_status_ok();
    rpc_data::<Vec<Post>>(&response)
}

#[allow(dead_code)]
pub async fn get_post(server: &TestServer, id: &str) -> TestResponse {
    server
        .get(rpc_path("getPost").as_str())
        .add_query_param("input", json!({ "id": id }).to_string())
        .add_header("Accept", "application/json")
        .await
}

#[allow(dead_code)]
pub async fn add_comment(server: &TestServer, post_id: &str, text: &str) -> TestResponse {
    call(
        server,
        "addComment",
        json!({
            "postId": post_id,
            "author": fake_username(),
            "avatarUrl": AVATAR_URL,
            "text": text,
        }),
    )
    .await
}

#[allow(dead_code)]
pub async fn add_fake_comment(server: &TestServer, post_id: &str) -> PostCommentView {
    let response = add_comment(server, post_id, &fake_text()).await;
    response.assert_status_ok();
    rpc_data::<PostCommentView>(&response)
}

#[allow(dead_code)]
pub async fn add_reply(
    server: &TestServer,
    post_id: &str,
    comment_id: &str,
    text: &str,
) -> TestResponse {
    call(
        server,
        "addReply",
        json!({
            "postId": post_id,
            "commentId": comment_id,
            "author": fake_username(),
            "avatarUrl": AVATAR_URL,
            "text": text,
        }),
    )
    .await
}

#[allow(dead_code)]
pub async fn add_fake_reply(
    server: &TestServer,
    post_id: &str,
    comment_id: &str,
) -> PostCommentReplyView {
    let response = add_reply(server, post_id, comment_id, &fake_text()).await;
    response.assert_status_ok();
    rpc_data::<PostCommentReplyView>(&response)
}

#[allow(dead_code)]
pub async fn post_like(server: &TestServer, procedure: &str, post_id: &str) -> Post {
    let response = call(server, procedure, json!({ "id": post_id })).await;
    response.assert_status_ok();
    rpc_data::<Post>(&response)
}

#[allow(dead_code)]
pub async fn comment_like(
    server: &TestServer,
    procedure: &str,
    post_id: &str,
    comment_id: &str,
) -> PostCommentView {
    let response = call(
        server,
        procedure,
        json!({ "postId": post_id, "commentId": comment_id }),
    )
    .await;
    response.assert_status_ok();
    rpc_data::<PostCommentView>(&response)
}

#[allow(dead_code)]
pub async fn reply_like(
    server: &TestServer,
    procedure: &str,
    post_id: &str,
    comment_id: &str,
    reply_id: &str,
) -> PostCommentReplyView {
    let response = call(
        server,
        procedure,
        json!({ "postId": post_id, "commentId": comment_id, "replyId": reply_id }),
    )
    .await;
    response.assert_status_ok();
    rpc_data::<PostCommentReplyView>(&response)
}
