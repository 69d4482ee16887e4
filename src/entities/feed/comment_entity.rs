use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::error::AppResult;
use crate::utils::validate_utils::{trim_string, validate_not_blank, validate_username};

use super::JUST_NOW;

/// A comment under a post. Replies reuse the same record one level down; the store only
/// ever appends replies to top-level comments, so a reply's own `replies` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub text: String,
    pub likes: u32,
    pub time_ago: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

pub type Reply = Comment;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[serde(deserialize_with = "trim_string")]
    #[validate(custom(function = validate_username))]
    pub author: String,
    #[validate(url(message = "Avatar must be a valid url"))]
    pub avatar_url: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(custom(function = validate_not_blank))]
    #[validate(length(min = 1, max = 300, message = "Text must be 1 to 300 characters"))]
    pub text: String,
}

impl Comment {
    pub fn new(id: String, data: CreateComment) -> AppResult<Self> {
        data.validate()?;
        Ok(Self {
            id,
            username: data.author,
            avatar_url: data.avatar_url,
            text: data.text,
            likes: 0,
            time_ago: JUST_NOW.to_string(),
            replies: vec![],
        })
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn unlike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }

    pub fn find_reply_mut(&mut self, reply_id: &str) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == reply_id)
    }

    /// Comments plus replies in this thread.
    pub fn thread_len(&self) -> u32 {
        1 + self.replies.len() as u32
    }
}
