use serde::{Deserialize, Serialize};

use crate::entities::feed::comment_entity::{Comment, Reply};
use crate::entities::feed::post_entity::Post;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentView {
    pub post: Post,
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCommentReplyView {
    pub post: Post,
    pub comment: Comment,
    pub reply: Reply,
}
