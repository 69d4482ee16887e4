use validator::Validate;

use crate::entities::feed::comment_entity::{Comment, CreateComment, Reply};
use crate::entities::feed::post_entity::{CreatePost, Post};
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::feed::{PostCommentReplyView, PostCommentView};

use super::id_generator::{IdGenerator, IdKind};

pub const POST_ENTITY: &str = "Post";
pub const COMMENT_ENTITY: &str = "Comment";
pub const REPLY_ENTITY: &str = "Reply";

/// Ordered in-memory feed, newest post first.
///
/// Every operation either resolves all of its lookups and validation and then applies a
/// single mutation, or returns an error and leaves the feed as it was. Returned entities
/// are snapshots taken after the mutation.
#[derive(Debug, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
    ids: IdGenerator,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        let mut ids = IdGenerator::new();
        for post in &posts {
            ids.observe(&post.id);
            for comment in &post.comments {
                ids.observe(&comment.id);
                for reply in &comment.replies {
                    ids.observe(&reply.id);
                }
            }
        }
        Self { posts, ids }
    }

    pub fn list_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn create_post(&mut self, data: CreatePost) -> AppResult<Post> {
        data.validate()?;
        let post = Post::new(self.ids.next_id(IdKind::Post), data)?;
        self.posts.insert(0, post.clone());
        Ok(post)
    }

    pub fn get_post(&self, post_id: &str) -> AppResult<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::not_found(POST_ENTITY, post_id))
    }

    pub fn like_post(&mut self, post_id: &str) -> AppResult<Post> {
        self.update_post(post_id, Post::like)
    }

    pub fn unlike_post(&mut self, post_id: &str) -> AppResult<Post> {
        self.update_post(post_id, Post::unlike)
    }

    pub fn add_comment(&mut self, post_id: &str, data: CreateComment) -> AppResult<PostCommentView> {
        data.validate()?;
        let post = find_post_mut(&mut self.posts, post_id)?;
        let comment = Comment::new(self.ids.next_id(IdKind::Comment), data)?;

        post.comments.push(comment.clone());
        post.total_comments_count += 1;

        Ok(PostCommentView {
            post: post.clone(),
            comment,
        })
    }

    pub fn add_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        data: CreateComment,
    ) -> AppResult<PostCommentReplyView> {
        data.validate()?;
        let post = find_post_mut(&mut self.posts, post_id)?;
        let comment = find_comment_mut(post, comment_id)?;
        let reply = Reply::new(self.ids.next_id(IdKind::Reply), data)?;

        comment.replies.push(reply.clone());
        let comment = comment.clone();
        post.total_comments_count += 1;

        Ok(PostCommentReplyView {
            post: post.clone(),
            comment,
            reply,
        })
    }

    pub fn like_comment(&mut self, post_id: &str, comment_id: &str) -> AppResult<PostCommentView> {
        self.update_comment(post_id, comment_id, Comment::like)
    }

    pub fn unlike_comment(
        &mut self,
        post_id: &str,
        comment_id: &str,
    ) -> AppResult<PostCommentView> {
        self.update_comment(post_id, comment_id, Comment::unlike)
    }

    pub fn like_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> AppResult<PostCommentReplyView> {
        self.update_reply(post_id, comment_id, reply_id, Reply::like)
    }

    pub fn unlike_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> AppResult<PostCommentReplyView> {
        self.update_reply(post_id, comment_id, reply_id, Reply::unlike)
    }

    fn update_post(&mut self, post_id: &str, apply: impl FnOnce(&mut Post)) -> AppResult<Post> {
        let post = find_post_mut(&mut self.posts, post_id)?;
        apply(post);
        Ok(post.clone())
    }

    fn update_comment(
        &mut self,
        post_id: &str,
        comment_id: &str,
        apply: impl FnOnce(&mut Comment),
    ) -> AppResult<PostCommentView> {
        let post = find_post_mut(&mut self.posts, post_id)?;
        let comment = find_comment_mut(post, comment_id)?;
        apply(comment);
        let comment = comment.clone();

        Ok(PostCommentView {
            post: post.clone(),
            comment,
        })
    }

    fn update_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        reply_id: &str,
        apply: impl FnOnce(&mut Reply),
    ) -> AppResult<PostCommentReplyView> {
        let post = find_post_mut(&mut self.posts, post_id)?;
        let comment = find_comment_mut(post, comment_id)?;
        let reply = comment
            .find_reply_mut(reply_id)
            .ok_or_else(|| AppError::not_found(REPLY_ENTITY, reply_id))?;
        apply(reply);
        let reply = reply.clone();
        let comment = comment.clone();

        Ok(PostCommentReplyView {
            post: post.clone(),
            comment,
            reply,
        })
    }
}

fn find_post_mut<'a>(posts: &'a mut [Post], post_id: &str) -> AppResult<&'a mut Post> {
    posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or_else(|| AppError::not_found(POST_ENTITY, post_id))
}

fn find_comment_mut<'a>(post: &'a mut Post, comment_id: &str) -> AppResult<&'a mut Comment> {
    post.find_comment_mut(comment_id)
        .ok_or_else(|| AppError::not_found(COMMENT_ENTITY, comment_id))
}
