use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::entities::feed::post_entity::Post;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::RpcInput;
use crate::models::view::feed::{PostCommentReplyView, PostCommentView};
use crate::models::view::rpc::RpcResponse;
use crate::services::feed_service::{
    AddCommentInput, AddReplyInput, CommentRefInput, CreatePostInput, FeedService, PostIdInput,
    ReplyRefInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Procedure {
    ListPosts,
    GetPost,
    CreatePost,
    LikePost,
    UnlikePost,
    AddComment,
    AddReply,
    LikeComment,
    UnlikeComment,
    LikeReply,
    UnlikeReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    Query,
    Mutation,
}

impl Procedure {
    pub fn kind(&self) -> ProcedureKind {
        match self {
            Procedure::ListPosts | Procedure::GetPost => ProcedureKind::Query,
            _ => ProcedureKind::Mutation,
        }
    }

    pub fn path(&self) -> String {
        format!("/{self}")
    }
}

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route(&Procedure::ListPosts.path(), get(list_posts).post(list_posts))
        .route(&Procedure::GetPost.path(), get(get_post).post(get_post))
        .route(&Procedure::CreatePost.path(), post(create_post))
        .route(&Procedure::LikePost.path(), post(like_post))
        .route(&Procedure::UnlikePost.path(), post(unlike_post))
        .route(&Procedure::AddComment.path(), post(add_comment))
        .route(&Procedure::AddReply.path(), post(add_reply))
        .route(&Procedure::LikeComment.path(), post(like_comment))
        .route(&Procedure::UnlikeComment.path(), post(unlike_comment))
        .route(&Procedure::LikeReply.path(), post(like_reply))
        .route(&Procedure::UnlikeReply.path(), post(unlike_reply))
        .fallback(procedure_not_found)
}

type RpcResult<T> = CtxResult<Json<RpcResponse<T>>>;

fn respond<T>(data: T) -> RpcResult<T> {
    Ok(Json(RpcResponse::new(data)))
}

async fn procedure_not_found(ctx: Ctx, uri: Uri) -> CtxError {
    let name = uri.path().trim_start_matches('/').to_string();
    ctx.to_ctx_error(AppError::ProcedureNotFound { name })
}

async fn list_posts(ctx: Ctx, State(state): State<Arc<CtxState>>) -> RpcResult<Vec<Post>> {
    respond(FeedService::new(&state.db, &ctx).list_posts().await)
}

async fn get_post(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<PostIdInput>,
) -> RpcResult<Post> {
    respond(FeedService::new(&state.db, &ctx).get_post(input).await?)
}

async fn create_post(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<CreatePostInput>,
) -> RpcResult<Post> {
    respond(FeedService::new(&state.db, &ctx).create_post(input).await?)
}

async fn like_post(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<PostIdInput>,
) -> RpcResult<Post> {
    respond(FeedService::new(&state.db, &ctx).like_post(input).await?)
}

async fn unlike_post(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<PostIdInput>,
) -> RpcResult<Post> {
    respond(FeedService::new(&state.db, &ctx).unlike_post(input).await?)
}

async fn add_comment(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<AddCommentInput>,
) -> RpcResult<PostCommentView> {
    respond(FeedService::new(&state.db, &ctx).add_comment(input).await?)
}

async fn add_reply(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<AddReplyInput>,
) -> RpcResult<PostCommentReplyView> {
    respond(FeedService::new(&state.db, &ctx).add_reply(input).await?)
}

async fn like_comment(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<CommentRefInput>,
) -> RpcResult<PostCommentView> {
    respond(FeedService::new(&state.db, &ctx).like_comment(input).await?)
}

async fn unlike_comment(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<CommentRefInput>,
) -> RpcResult<PostCommentView> {
    respond(FeedService::new(&state.db, &ctx).unlike_comment(input).await?)
}

async fn like_reply(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<ReplyRefInput>,
) -> RpcResult<PostCommentReplyView> {
    respond(FeedService::new(&state.db, &ctx).like_reply(input).await?)
}

async fn unlike_reply(
    ctx: Ctx,
    State(state): State<Arc<CtxState>>,
    RpcInput(input): RpcInput<ReplyRefInput>,
) -> RpcResult<PostCommentReplyView> {
    respond(FeedService::new(&state.db, &ctx).unlike_reply(input).await?)
}
