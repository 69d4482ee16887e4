use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::database::client::Database;
use crate::entities::feed::comment_entity::CreateComment;
use crate::entities::feed::post_entity::{CreatePost, Post};
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{CtxError, CtxResult};
use crate::models::view::feed::{PostCommentReplyView, PostCommentView};
use crate::utils::validate_utils::validate_not_blank;

pub type CreatePostInput = CreatePost;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostIdInput {
    #[validate(custom(function = validate_not_blank))]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentInput {
    #[validate(custom(function = validate_not_blank))]
    pub post_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub comment: CreateComment,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyInput {
    #[validate(custom(function = validate_not_blank))]
    pub post_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub comment_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub reply: CreateComment,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRefInput {
    #[validate(custom(function = validate_not_blank))]
    pub post_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub comment_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRefInput {
    #[validate(custom(function = validate_not_blank))]
    pub post_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub comment_id: String,
    #[validate(custom(function = validate_not_blank))]
    pub reply_id: String,
}

/// One method per procedure; each makes exactly one store call under the store lock.
pub struct FeedService<'a> {
    db: &'a Database,
    ctx: &'a Ctx,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a Database, ctx: &'a Ctx) -> Self {
        Self { db, ctx }
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        let posts = self.db.store().await.list_posts().to_vec();
        debug!(req_id = %self.ctx.req_id(), count = posts.len(), "listPosts");
        posts
    }

    pub async fn get_post(&self, input: PostIdInput) -> CtxResult<Post> {
        let store = self.db.store().await;
        let post = store
            .get_post(&input.id)
            .map_err(CtxError::from(self.ctx))?
            .clone();
        debug!(req_id = %self.ctx.req_id(), post_id = %post.id, "getPost");
        Ok(post)
    }

    pub async fn create_post(&self, input: CreatePostInput) -> CtxResult<Post> {
        let post = self
            .db
            .store()
            .await
            .create_post(input)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), post_id = %post.id, author = %post.username, "createPost");
        Ok(post)
    }

    pub async fn like_post(&self, input: PostIdInput) -> CtxResult<Post> {
        let post = self
            .db
            .store()
            .await
            .like_post(&input.id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), post_id = %post.id, likes = post.likes, "likePost");
        Ok(post)
    }

    pub async fn unlike_post(&self, input: PostIdInput) -> CtxResult<Post> {
        let post = self
            .db
            .store()
            .await
            .unlike_post(&input.id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), post_id = %post.id, likes = post.likes, "unlikePost");
        Ok(post)
    }

    pub async fn add_comment(&self, input: AddCommentInput) -> CtxResult<PostCommentView> {
        let view = self
            .db
            .store()
            .await
            .add_comment(&input.post_id, input.comment)
            .map_err(CtxError::from(self.ctx))?;
        info!(
            req_id = %self.ctx.req_id(),
            post_id = %view.post.id,
            comment_id = %view.comment.id,
            "addComment"
        );
        Ok(view)
    }

    pub async fn add_reply(&self, input: AddReplyInput) -> CtxResult<PostCommentReplyView> {
        let view = self
            .db
            .store()
            .await
            .add_reply(&input.post_id, &input.comment_id, input.reply)
            .map_err(CtxError::from(self.ctx))?;
        info!(
            req_id = %self.ctx.req_id(),
            post_id = %view.post.id,
            comment_id = %view.comment.id,
            reply_id = %view.reply.id,
            "addReply"
        );
        Ok(view)
    }

    pub async fn like_comment(&self, input: CommentRefInput) -> CtxResult<PostCommentView> {
        let view = self
            .db
            .store()
            .await
            .like_comment(&input.post_id, &input.comment_id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), comment_id = %view.comment.id, likes = view.comment.likes, "likeComment");
        Ok(view)
    }

    pub async fn unlike_comment(&self, input: CommentRefInput) -> CtxResult<PostCommentView> {
        let view = self
            .db
            .store()
            .await
            .unlike_comment(&input.post_id, &input.comment_id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), comment_id = %view.comment.id, likes = view.comment.likes, "unlikeComment");
        Ok(view)
    }

    pub async fn like_reply(&self, input: ReplyRefInput) -> CtxResult<PostCommentReplyView> {
        let view = self
            .db
            .store()
            .await
            .like_reply(&input.post_id, &input.comment_id, &input.reply_id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), reply_id = %view.reply.id, likes = view.reply.likes, "likeReply");
        Ok(view)
    }

    pub async fn unlike_reply(&self, input: ReplyRefInput) -> CtxResult<PostCommentReplyView> {
        let view = self
            .db
            .store()
            .await
            .unlike_reply(&input.post_id, &input.comment_id, &input.reply_id)
            .map_err(CtxError::from(self.ctx))?;
        info!(req_id = %self.ctx.req_id(), reply_id = %view.reply.id, likes = view.reply.likes, "unlikeReply");
        Ok(view)
    }
}
