use crate::entities::feed::comment_entity::{Comment, Reply};
use crate::entities::feed::post_entity::Post;

fn comment(
    id: &str,
    username: &str,
    avatar: u8,
    text: &str,
    likes: u32,
    time_ago: &str,
    replies: Vec<Reply>,
) -> Comment {
    Comment {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: avatar_url(avatar),
        text: text.to_string(),
        likes,
        time_ago: time_ago.to_string(),
        replies,
    }
}

fn avatar_url(img: u8) -> String {
    format!("https://i.pravatar.cc/150?img={img}")
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    username: &str,
    avatar: u8,
    image: u16,
    caption: &str,
    likes: u32,
    time_ago: &str,
    comments: Vec<Comment>,
) -> Post {
    let mut post = Post {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: avatar_url(avatar),
        image_url: format!("https://picsum.photos/id/{image}/600/600"),
        caption: caption.to_string(),
        likes,
        time_ago: time_ago.to_string(),
        comments,
        total_comments_count: 0,
    };
    post.total_comments_count = post.counted_comments();
    post
}

/// Feed the server starts with. Ids are unique across the whole feed.
pub fn seed_posts() -> Vec<Post> {
    vec![
        post(
            "post_1717000300000",
            "john_doe",
            11,
            1015,
            "Sunset over the lake. Could not ask for a better evening.",
            128,
            "2h",
            vec![
                comment(
                    "comment_1717000300100",
                    "jane_smith",
                    5,
                    "Absolutely stunning colors!",
                    12,
                    "1h",
                    vec![
                        comment(
                            "reply_1717000300110",
                            "john_doe",
                            11,
                            "Thanks! Took it right before the storm rolled in.",
                            3,
                            "45m",
                            vec![],
                        ),
                        comment(
                            "reply_1717000300120",
                            "mike.lee",
                            14,
                            "Which lake is this?",
                            1,
                            "30m",
                            vec![],
                        ),
                    ],
                ),
                comment(
                    "comment_1717000300200",
                    "travel.with.sara",
                    32,
                    "Adding this to my list.",
                    4,
                    "50m",
                    vec![],
                ),
            ],
        ),
        post(
            "post_1717000200000",
            "jane_smith",
            5,
            1025,
            "Meet Biscuit, the newest member of the family.",
            342,
            "5h",
            vec![comment(
                "comment_1717000200100",
                "alex_k",
                8,
                "Biscuit is adorable",
                20,
                "4h",
                vec![comment(
                    "reply_1717000200110",
                    "jane_smith",
                    5,
                    "He says thank you",
                    6,
                    "3h",
                    vec![],
                )],
            )],
        ),
        post(
            "post_1717000100000",
            "mike.lee",
            14,
            1040,
            "Weekend hike, 14 km and worth every step.",
            57,
            "1d",
            vec![],
        ),
    ]
}
