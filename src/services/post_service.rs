use chrono::Utc;
use surrealdb::{engine::any::Any, sql::Datetime, Surreal};

use crate::{
    db::POST_TABLE,
    helpers::{
        post_helpers::{
            find_post, insert_post, pull_comment, pull_like, push_comment, push_like, remove_post,
        },
        thing_helpers::new_record_key,
    },
    models::{
        post::{
            Comment, CommentResponse, CreateCommentRequest, CreatePostRequest, Like, PostRecord,
            PostResponse,
        },
        user::UserRecord,
    },
    Error,
};

/// Presence check shared by posts and comments.
fn required_text(text: Option<String>) -> Result<String, Error> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::InvalidInput {
            reason: "Text is required".to_string(),
        }),
    }
}

pub struct PostService;

impl PostService {
    pub async fn create_post(
        db: &Surreal<Any>,
        user_id: &str,
        author: &UserRecord,
        payload: CreatePostRequest,
    ) -> Result<PostResponse, Error> {
        let text = required_text(payload.text)?;

        let post = PostRecord {
            id: None,
            user: user_id.to_string(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: vec![],
            comments: vec![],
            date: Datetime::from(Utc::now()),
        };

        let post_id = new_record_key();
        let created = insert_post(db, &post_id, post).await?;

        tracing::debug!("post {} created by {}", post_id, user_id);

        Ok(created.into())
    }

    /// Tous les posts, les plus récents d'abord
    pub async fn get_posts(db: &Surreal<Any>) -> Result<Vec<PostResponse>, Error> {
        let posts: Vec<PostRecord> = db
            .query("SELECT * FROM type::table($tb) ORDER BY date DESC")
            .bind(("tb", POST_TABLE))
            .await?
            .take(0)?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn get_post(db: &Surreal<Any>, post_id: &str) -> Result<PostResponse, Error> {
        Ok(find_post(db, post_id).await?.into())
    }

    pub async fn delete_post(db: &Surreal<Any>, user_id: &str, post_id: &str) -> Result<(), Error> {
        let post = find_post(db, post_id).await?;

        if post.user != user_id {
            return Err(Error::NotAuthorized);
        }

        remove_post(db, post_id).await?;

        tracing::debug!("post {} removed by {}", post_id, user_id);

        Ok(())
    }

    pub async fn like_post(
        db: &Surreal<Any>,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<Like>, Error> {
        let post = find_post(db, post_id).await?;

        let already_liked = || Error::PostAlreadyLiked {
            id: post_id.to_string(),
        };
        if post.is_liked_by(user_id) {
            return Err(already_liked());
        }

        // Another request may have liked it since the read; the write re-checks.
        let post = match push_like(db, post_id, user_id).await? {
            Some(post) => post,
            None => {
                find_post(db, post_id).await?;
                return Err(already_liked());
            }
        };

        tracing::debug!("post {} liked by {}", post_id, user_id);

        Ok(post.likes)
    }

    pub async fn unlike_post(
        db: &Surreal<Any>,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<Like>, Error> {
        let post = find_post(db, post_id).await?;

        let not_yet_liked = || Error::PostNotYetLiked {
            id: post_id.to_string(),
        };
        if !post.is_liked_by(user_id) {
            return Err(not_yet_liked());
        }

        let post = match pull_like(db, post_id, user_id).await? {
            Some(post) => post,
            None => {
                find_post(db, post_id).await?;
                return Err(not_yet_liked());
            }
        };

        tracing::debug!("post {} unliked by {}", post_id, user_id);

        Ok(post.likes)
    }

    pub async fn add_comment(
        db: &Surreal<Any>,
        user_id: &str,
        author: &UserRecord,
        post_id: &str,
        payload: CreateCommentRequest,
    ) -> Result<Vec<CommentResponse>, Error> {
        let text = required_text(payload.text)?;
        find_post(db, post_id).await?;

        let comment = Comment {
            id: new_record_key(),
            user: user_id.to_string(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Datetime::from(Utc::now()),
        };
        let comment_id = comment.id.clone();

        let post = push_comment(db, post_id, comment)
            .await?
            .ok_or_else(|| Error::PostNotFound {
                id: post_id.to_string(),
            })?;

        tracing::debug!("comment {} added to post {} by {}", comment_id, post_id, user_id);

        Ok(post.comments.into_iter().map(CommentResponse::from).collect())
    }

    pub async fn delete_comment(
        db: &Surreal<Any>,
        user_id: &str,
        post_id: &str,
        comment_id: &str,
    ) -> Result<Vec<CommentResponse>, Error> {
        let post = find_post(db, post_id).await?;

        let comment_not_found = || Error::CommentNotFound {
            id: comment_id.to_string(),
        };
        let index = post.comment_index(comment_id).ok_or_else(comment_not_found)?;

        // A comment's author never changes, so the ownership check holds for the write.
        if post.comments[index].user != user_id {
            return Err(Error::NotAuthorized);
        }

        let post = match pull_comment(db, post_id, comment_id).await? {
            Some(post) => post,
            None => {
                find_post(db, post_id).await?;
                return Err(comment_not_found());
            }
        };

        tracing::debug!("comment {} removed from post {} by {}", comment_id, post_id, user_id);

        Ok(post.comments.into_iter().map(CommentResponse::from).collect())
    }
}
