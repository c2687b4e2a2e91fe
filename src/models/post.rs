use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::helpers::thing_helpers::thing_key;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Like {
    pub user: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: Datetime,
}

/// Stored post document. `likes` and `comments` are kept newest first.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostRecord {
    #[serde(default, skip_serializing)]
    pub id: Option<Thing>,

    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,

    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,

    pub date: Datetime,
}

impl PostRecord {
    pub fn like_index(&self, user_id: &str) -> Option<usize> {
        self.likes.iter().position(|like| like.user == user_id)
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.like_index(user_id).is_some()
    }

    pub fn comment_index(&self, comment_id: &str) -> Option<usize> {
        self.comments
            .iter()
            .position(|comment| comment.id == comment_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user: comment.user,
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            date: comment.date.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<CommentResponse>,
    pub date: DateTime<Utc>,
}

impl From<PostRecord> for PostResponse {
    fn from(post: PostRecord) -> Self {
        Self {
            id: post.id.as_ref().map(thing_key).unwrap_or_default(),
            user: post.user,
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes,
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            date: post.date.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreatePostRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateCommentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageResponse {
    pub msg: String,
}
