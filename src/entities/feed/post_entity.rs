use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::error::AppResult;
use crate::utils::validate_utils::{trim_string, validate_username};

use super::comment_entity::Comment;
use super::JUST_NOW;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub image_url: String,
    pub caption: String,
    pub likes: u32,
    pub time_ago: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    // incremented on every comment or reply, never recomputed
    #[serde(default)]
    pub total_comments_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    #[serde(deserialize_with = "trim_string")]
    #[validate(custom(function = validate_username))]
    pub author: String,
    #[validate(url(message = "Avatar must be a valid url"))]
    pub avatar_url: String,
    #[validate(url(message = "Image must be a valid url"))]
    pub image_url: String,
    #[validate(length(max = 500, message = "Max 500 characters"))]
    pub caption: String,
}

impl Post {
    pub fn new(id: String, data: CreatePost) -> AppResult<Self> {
        data.validate()?;
        Ok(Self {
            id,
            username: data.author,
            avatar_url: data.avatar_url,
            image_url: data.image_url,
            caption: data.caption,
            likes: 0,
            time_ago: JUST_NOW.to_string(),
            comments: vec![],
            total_comments_count: 0,
        })
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn unlike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }

    pub fn find_comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }

    /// Comments plus replies actually present under this post.
    pub fn counted_comments(&self) -> u32 {
        self.comments.iter().map(Comment::thread_len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(caption: &str) -> CreatePost {
        CreatePost {
            author: "alice".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=1".to_string(),
            image_url: "https://picsum.photos/id/10/600/600".to_string(),
            caption: caption.to_string(),
        }
    }

    #[test]
    fn new_post_defaults() {
        let post = Post::new("post_1".to_string(), input("hi")).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.time_ago, "now");
        assert!(post.comments.is_empty());
        assert_eq!(post.total_comments_count, 0);
    }

    #[test]
    fn caption_limit() {
        assert!(Post::new("p".to_string(), input(&"a".repeat(500))).is_ok());
        assert!(Post::new("p".to_string(), input(&"a".repeat(501))).is_err());
        assert!(Post::new("p".to_string(), input("")).is_ok());
    }

    #[test]
    fn malformed_urls_rejected() {
        let mut data = input("hi");
        data.avatar_url = "not a url".to_string();
        assert!(Post::new("p".to_string(), data).is_err());

        let mut data = input("hi");
        data.image_url = "picsum.photos/1".to_string();
        assert!(Post::new("p".to_string(), data).is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let post = Post::new("post_1".to_string(), input("hi")).unwrap();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["avatarUrl"], "https://i.pravatar.cc/150?img=1");
        assert_eq!(value["totalCommentsCount"], 0);
        assert_eq!(value["timeAgo"], "now");
    }
}
