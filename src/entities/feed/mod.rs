pub mod comment_entity;
pub mod post_entity;

/// Relative-time label stamped on freshly created posts, comments and replies.
pub const JUST_NOW: &str = "now";
