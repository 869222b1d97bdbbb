//! Ownership checks for blog resources.
//!
//! Every mutating post operation loads the target row first and calls
//! [`authorize_mutation`] before touching the database again. Single-post
//! reads go through [`authorize_read`], which hides other users' posts.

use crate::backend::auth::users::UserIdentity;
use crate::backend::error::BackendError;
use crate::shared::Post;

/// A resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

impl Owned for Post {
    fn owner_id(&self) -> i64 {
        self.author_id
    }
}

/// Allow the change only if `caller` owns `resource`.
pub fn authorize_mutation<R: Owned>(caller: &UserIdentity, resource: &R) -> Result<(), BackendError> {
    if resource.owner_id() != caller.id {
        tracing::warn!(
            "User {} attempted to modify a resource owned by {}",
            caller.id,
            resource.owner_id()
        );
        return Err(BackendError::forbidden("Not authorized to modify this post"));
    }
    Ok(())
}

/// Allow the read only if `caller` owns `resource`.
///
/// A post owned by someone else is reported as missing, so its existence
/// does not leak.
pub fn authorize_read<R: Owned>(caller: &UserIdentity, resource: &R) -> Result<(), BackendError> {
    if resource.owner_id() != caller.id {
        tracing::warn!(
            "User {} attempted to read a resource owned by {}",
            caller.id,
            resource.owner_id()
        );
        return Err(BackendError::not_found("Post not found"));
    }
    Ok(())
}
