//! Vote service
//!
//! Flips a user's vote on a post. The store applies the vote row change and
//! the counter change together.

use linkshare_core::RecordId;
use tracing::{info, instrument};

use crate::dto::VoteResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::parse_guid;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the user's vote on a post
    #[instrument(skip(self))]
    pub async fn toggle_vote(&self, user_id: RecordId, post_guid: &str) -> ServiceResult<VoteResponse> {
        let guid = parse_guid("Post", post_guid)?;
        let toggle = self.ctx.vote_repo().toggle(user_id, &guid).await?;

        info!(post_id = %toggle.post_id, voted = toggle.voted, votes = toggle.votes, "Vote toggled");

        Ok(VoteResponse::from(toggle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{context, register, submit_post};
    use crate::services::PostService;
    use linkshare_core::{ErrorKind, Guid};

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let ctx = context();
        let alice = register(&ctx, "alice").await;
        let bob = register(&ctx, "bob").await;
        let post = submit_post(&ctx, &alice, "Votable post").await;
        let votes = VoteService::new(&ctx);

        let on = votes.toggle_vote(bob.id, &post.guid).await.unwrap();
        assert!(on.voted);
        assert_eq!(on.votes, 1);

        let off = votes.toggle_vote(bob.id, &post.guid).await.unwrap();
        assert!(!off.voted);
        assert_eq!(off.votes, 0);

        let view = PostService::new(&ctx)
            .get_post(&post.guid, Some(bob.id))
            .await
            .unwrap();
        assert_eq!(view.votes, 0);
        assert!(!view.voted);
    }

    #[tokio::test]
    async fn test_counter_matches_live_votes() {
        let ctx = context();
        let alice = register(&ctx, "alice").await;
        let bob = register(&ctx, "bob").await;
        let post = submit_post(&ctx, &alice, "Votable post").await;
        let guid = Guid::parse(&post.guid).unwrap();
        let votes = VoteService::new(&ctx);

        for voter in [&alice, &bob, &alice, &bob, &bob] {
            let toggle = votes.toggle_vote(voter.id, &post.guid).await.unwrap();
            let view = ctx.post_repo().find_by_guid(&guid, None).await.unwrap().unwrap();
            let live = ctx.vote_repo().count_live(view.post.id).await.unwrap();
            assert_eq!(i64::from(toggle.votes), live);
            assert_eq!(view.post.votes, toggle.votes);
        }
    }

    #[tokio::test]
    async fn test_toggle_unknown_post() {
        let ctx = context();
        let alice = register(&ctx, "alice").await;
        let votes = VoteService::new(&ctx);

        let err = votes.toggle_vote(alice.id, "nonexistent-guid").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = votes
            .toggle_vote(alice.id, &Guid::new().to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
