//! In-memory implementation of the repository traits

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, instrument};
use uuid::Uuid;

use linkshare_core::entities::{
    Comment, CommentView, NewComment, NewPost, NewUser, Post, PostView, User, Vote, VoteToggle,
};
use linkshare_core::error::DomainError;
use linkshare_core::traits::{
    CommentRepository, PostRepository, RepoResult, UserRepository, VoteRepository,
};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::{
    CommentModel, CommentViewModel, PostModel, PostViewModel, UserModel, VoteModel,
};

/// Rows of every table, guarded by one lock
///
/// Rows are never removed; soft deletes set `deleted_at` as the SQL schema does.
#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserModel>,
    posts: Vec<PostModel>,
    votes: Vec<VoteModel>,
    comments: Vec<CommentModel>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn live_user(&self, id: i64) -> Option<&UserModel> {
        self.users.iter().find(|u| u.id == id && !u.is_deleted())
    }

    fn username_of(&self, id: i64) -> Option<String> {
        // Authors stay visible on their content even after account deletion
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
    }

    fn has_live_vote(&self, user_id: Option<i64>, post_id: i64) -> bool {
        user_id.is_some_and(|uid| {
            self.votes
                .iter()
                .any(|v| v.user_id == uid && v.post_id == post_id && v.is_live())
        })
    }

    fn post_view(&self, post: &PostModel, viewer: Option<RecordId>) -> Option<PostViewModel> {
        let author_username = self.username_of(post.user_id)?;
        Some(PostViewModel {
            post: post.clone(),
            author_username,
            voted: self.has_live_vote(viewer.map(RecordId::into_inner), post.id),
        })
    }
}

/// Process-local store implementing all repository traits
///
/// Cloning is cheap and every clone shares the same tables. Each operation
/// holds the lock for its whole duration, so a vote toggle is observed either
/// entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vote rows, live and retired
    pub fn vote_history_len(&self) -> usize {
        self.tables.lock().votes.len()
    }
}

fn lower_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl UserRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables.live_user(id.into_inner()).cloned().map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .iter()
            .find(|u| !u.is_deleted() && lower_eq(&u.username, username))
            .cloned()
            .map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .iter()
            .find(|u| !u.is_deleted() && lower_eq(&u.email, email))
            .cloned()
            .map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().any(|u| lower_eq(&u.username, username)))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let tables = self.tables.lock();
        Ok(tables.users.iter().any(|u| lower_eq(&u.email, email)))
    }

    #[instrument(skip(self, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut tables = self.tables.lock();

        if tables.users.iter().any(|u| lower_eq(&u.username, &user.username)) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        if tables.users.iter().any(|u| lower_eq(&u.email, &user.email)) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let model = UserModel {
            id: tables.next_id(),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.users.push(model.clone());

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>> {
        let tables = self.tables.lock();
        Ok(tables
            .live_user(id.into_inner())
            .map(|u| u.password_hash.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let now = Utc::now();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id.into_inner() && !u.is_deleted())
            .ok_or(DomainError::UserNotFound(id))?;
        user.deleted_at = Some(now);
        user.updated_at = now;
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn list(&self, viewer: Option<RecordId>) -> RepoResult<Vec<PostView>> {
        let tables = self.tables.lock();
        let mut rows: Vec<PostViewModel> = tables
            .posts
            .iter()
            .filter(|p| !p.is_deleted())
            .filter_map(|p| tables.post_view(p, viewer))
            .collect();

        rows.sort_by(|a, b| {
            b.post
                .votes
                .cmp(&a.post.votes)
                .then_with(|| b.post.created_at.cmp(&a.post.created_at))
                .then_with(|| b.post.id.cmp(&a.post.id))
        });

        Ok(rows.into_iter().map(PostView::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_guid(
        &self,
        guid: &Guid,
        viewer: Option<RecordId>,
    ) -> RepoResult<Option<PostView>> {
        let tables = self.tables.lock();
        Ok(tables
            .posts
            .iter()
            .find(|p| p.guid == guid.into_inner() && !p.is_deleted())
            .and_then(|p| tables.post_view(p, viewer))
            .map(PostView::from))
    }

    #[instrument(skip(self, post), fields(guid = %post.guid, user_id = %post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut tables = self.tables.lock();

        if tables.live_user(post.user_id.into_inner()).is_none() {
            return Err(DomainError::UserNotFound(post.user_id));
        }
        if tables.posts.iter().any(|p| p.guid == post.guid.into_inner()) {
            return Err(DomainError::InternalError(format!(
                "Duplicate post guid: {}",
                post.guid
            )));
        }

        let now = Utc::now();
        let model = PostModel {
            id: tables.next_id(),
            guid: post.guid.into_inner(),
            user_id: post.user_id.into_inner(),
            title: post.title.clone(),
            description: post.description.clone(),
            votes: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.posts.push(model.clone());

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, guid: &Guid) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let now = Utc::now();
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.guid == guid.into_inner() && !p.is_deleted())
            .ok_or_else(|| DomainError::PostNotFound(guid.to_string()))?;
        post.deleted_at = Some(now);
        post.updated_at = now;
        Ok(())
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find(&self, user_id: RecordId, post_id: RecordId) -> RepoResult<Option<Vote>> {
        let tables = self.tables.lock();
        Ok(tables
            .votes
            .iter()
            .find(|v| {
                v.user_id == user_id.into_inner() && v.post_id == post_id.into_inner() && v.is_live()
            })
            .cloned()
            .map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn count_live(&self, post_id: RecordId) -> RepoResult<i64> {
        let tables = self.tables.lock();
        let count = tables
            .votes
            .iter()
            .filter(|v| v.post_id == post_id.into_inner() && v.is_live())
            .count();
        Ok(count as i64)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: RecordId, post_guid: &Guid) -> RepoResult<VoteToggle> {
        let mut tables = self.tables.lock();
        let uuid: Uuid = post_guid.into_inner();

        // Every check happens before the first write, so a failure changes nothing
        let post_idx = tables
            .posts
            .iter()
            .position(|p| p.guid == uuid && !p.is_deleted())
            .ok_or_else(|| DomainError::PostNotFound(post_guid.to_string()))?;
        if tables.live_user(user_id.into_inner()).is_none() {
            return Err(DomainError::UserNotFound(user_id));
        }

        let post_id = tables.posts[post_idx].id;
        let now = Utc::now();
        let live_vote = tables
            .votes
            .iter()
            .position(|v| v.user_id == user_id.into_inner() && v.post_id == post_id && v.is_live());

        let voted = if let Some(idx) = live_vote {
            let vote = &mut tables.votes[idx];
            vote.deleted_at = Some(now);
            vote.updated_at = now;
            false
        } else {
            let id = tables.next_id();
            tables.votes.push(VoteModel {
                id,
                user_id: user_id.into_inner(),
                post_id,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            });
            true
        };

        let post = &mut tables.posts[post_idx];
        post.votes += if voted { 1 } else { -1 };
        post.updated_at = now;
        let votes = post.votes;

        debug!(post_id, voted, votes, "Vote toggled");

        Ok(VoteToggle {
            post_id: RecordId::new(post_id),
            post_guid: *post_guid,
            voted,
            votes,
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn find_by_guid(&self, guid: &Guid) -> RepoResult<Option<Comment>> {
        let tables = self.tables.lock();
        Ok(tables
            .comments
            .iter()
            .find(|c| c.guid == guid.into_inner() && !c.is_deleted())
            .cloned()
            .map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>> {
        let tables = self.tables.lock();
        let mut rows: Vec<CommentViewModel> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id.into_inner() && !c.is_deleted())
            .filter_map(|c| {
                tables.username_of(c.user_id).map(|author_username| CommentViewModel {
                    comment: c.clone(),
                    author_username,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.comment
                .created_at
                .cmp(&b.comment.created_at)
                .then_with(|| a.comment.id.cmp(&b.comment.id))
        });

        Ok(rows.into_iter().map(CommentView::from).collect())
    }

    #[instrument(skip(self, comment), fields(guid = %comment.guid, post_id = %comment.post_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut tables = self.tables.lock();

        if tables.live_user(comment.user_id.into_inner()).is_none() {
            return Err(DomainError::UserNotFound(comment.user_id));
        }
        if !tables.posts.iter().any(|p| p.id == comment.post_id.into_inner()) {
            return Err(DomainError::PostNotFound(comment.post_id.to_string()));
        }

        let now = Utc::now();
        let model = CommentModel {
            id: tables.next_id(),
            guid: comment.guid.into_inner(),
            user_id: comment.user_id.into_inner(),
            post_id: comment.post_id.into_inner(),
            body: comment.body.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.comments.push(model.clone());

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, guid: &Guid) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let now = Utc::now();
        let comment = tables
            .comments
            .iter_mut()
            .find(|c| c.guid == guid.into_inner() && !c.is_deleted())
            .ok_or_else(|| DomainError::CommentNotFound(guid.to_string()))?;
        comment.deleted_at = Some(now);
        comment.updated_at = now;
        Ok(())
    }
}
