use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct PostRegisterDto {
    pub title: String,
    pub content: String,
}

// Read view for a single post. The id is left out on purpose.
#[derive(Debug, Serialize)]
pub struct PostResponseDto {
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponseDto {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            content: post.content,
        }
    }
}
