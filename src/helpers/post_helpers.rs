use surrealdb::engine::any::Any;
use surrealdb::Surreal;

use crate::{
    db::POST_TABLE,
    helpers::thing_helpers::is_valid_id,
    models::post::{Comment, Like, PostRecord},
    Error,
};

/// Charge un post ou renvoie `PostNotFound`
pub async fn find_post(db: &Surreal<Any>, post_id: &str) -> Result<PostRecord, Error> {
    if !is_valid_id(post_id) {
        return Err(Error::PostNotFound {
            id: post_id.to_string(),
        });
    }

    let post: Option<PostRecord> = db
        .query("SELECT * FROM type::thing($tb, $id)")
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .await?
        .take(0)?;

    post.ok_or_else(|| Error::PostNotFound {
        id: post_id.to_string(),
    })
}

pub async fn insert_post(
    db: &Surreal<Any>,
    post_id: &str,
    post: PostRecord,
) -> Result<PostRecord, Error> {
    let created: Option<PostRecord> = db
        .query("CREATE type::thing($tb, $id) CONTENT $post")
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .bind(("post", post))
        .await?
        .take(0)?;

    created.ok_or_else(|| Error::DbError(format!("post {post_id} was not created")))
}

/// Prepends the like unless the user already appears in `likes`.
/// `None` when nothing was written (already liked, or the post is gone).
pub async fn push_like(
    db: &Surreal<Any>,
    post_id: &str,
    user_id: &str,
) -> Result<Option<PostRecord>, Error> {
    let like = Like {
        user: user_id.to_string(),
    };

    let updated: Option<PostRecord> = db
        .query(
            "UPDATE type::thing($tb, $id) SET likes = array::prepend(likes, $like) \
             WHERE likes.user CONTAINSNOT $user RETURN AFTER",
        )
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .bind(("like", like))
        .bind(("user", user_id.to_string()))
        .await?
        .take(0)?;

    Ok(updated)
}

/// Drops the user's like. `None` when the user had not liked the post.
pub async fn pull_like(
    db: &Surreal<Any>,
    post_id: &str,
    user_id: &str,
) -> Result<Option<PostRecord>, Error> {
    let updated: Option<PostRecord> = db
        .query(
            "UPDATE type::thing($tb, $id) SET likes = likes[WHERE user != $user] \
             WHERE likes.user CONTAINS $user RETURN AFTER",
        )
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .bind(("user", user_id.to_string()))
        .await?
        .take(0)?;

    Ok(updated)
}

pub async fn push_comment(
    db: &Surreal<Any>,
    post_id: &str,
    comment: Comment,
) -> Result<Option<PostRecord>, Error> {
    let updated: Option<PostRecord> = db
        .query(
            "UPDATE type::thing($tb, $id) SET comments = array::prepend(comments, $comment) \
             RETURN AFTER",
        )
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .bind(("comment", comment))
        .await?
        .take(0)?;

    Ok(updated)
}

/// Removes the comment by id. `None` when no such comment is left.
pub async fn pull_comment(
    db: &Surreal<Any>,
    post_id: &str,
    comment_id: &str,
) -> Result<Option<PostRecord>, Error> {
    let updated: Option<PostRecord> = db
        .query(
            "UPDATE type::thing($tb, $id) SET comments = comments[WHERE id != $comment_id] \
             WHERE comments.id CONTAINS $comment_id RETURN AFTER",
        )
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .bind(("comment_id", comment_id.to_string()))
        .await?
        .take(0)?;

    Ok(updated)
}

pub async fn remove_post(db: &Surreal<Any>, post_id: &str) -> Result<(), Error> {
    db.query("DELETE type::thing($tb, $id)")
        .bind(("tb", POST_TABLE))
        .bind(("id", post_id.to_string()))
        .await?
        .check()?;

    Ok(())
}
