//! [`Command`] for moderating a [`Review`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{review, Review},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for approving or rejecting a pending [`Review`].
#[derive(Clone, Copy, Debug)]
pub struct ModerateReview {
    /// ID of the [`Review`] to moderate.
    pub review_id: review::Id,

    /// Indicator whether the [`Review`] is approved or rejected.
    pub approve: bool,
}

impl<Db, M> Command<ModerateReview> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Review>, review::Id>>,
            Ok = Option<Review>,
            Err = Traced<database::Error>,
        > + Database<Update<Review>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Review;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ModerateReview,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ModerateReview { review_id, approve } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut review = tx
            .execute(Select(By::<Option<Review>, _>::new(review_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewNotExists(review_id))
            .map_err(tracerr::wrap!())?;
        if review.status != review::Status::Pending {
            return Err(tracerr::new!(E::ReviewAlreadyModerated(review_id)));
        }

        review.status = if approve {
            review::Status::Approved
        } else {
            review::Status::Rejected
        };
        tx.execute(Update(review.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(review)
    }
}

/// Error of [`ModerateReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Review`] doesn't exist.
    #[display("`Review(id: {_0})` does not exist")]
    #[from(ignore)]
    ReviewNotExists(#[error(not(source))] review::Id),

    /// [`Review`] has been moderated already.
    #[display("`Review(id: {_0})` is moderated already")]
    #[from(ignore)]
    ReviewAlreadyModerated(#[error(not(source))] review::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{review, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, ModerateReview};

    #[tokio::test]
    async fn approves_and_rejects_pending_reviews() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let good = fixture::review(&vacation);
        let bad = fixture::review(&vacation);
        let db = Mock::with(State {
            reviews: [(good.id, good.clone()), (bad.id, bad.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let approved = svc
            .execute(ModerateReview {
                review_id: good.id,
                approve: true,
            })
            .await
            .unwrap();
        let rejected = svc
            .execute(ModerateReview {
                review_id: bad.id,
                approve: false,
            })
            .await
            .unwrap();

        assert_eq!(approved.status, review::Status::Approved);
        assert_eq!(rejected.status, review::Status::Rejected);
        assert_eq!(
            db.state().reviews[&bad.id].status,
            review::Status::Rejected,
        );
    }

    #[tokio::test]
    async fn refuses_moderated_review() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let mut review = fixture::review(&vacation);
        review.status = review::Status::Approved;
        let db = Mock::with(State {
            reviews: [(review.id, review.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(ModerateReview {
                review_id: review.id,
                approve: false,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::ReviewAlreadyModerated(id) if id == review.id,
            ),
            "unexpected error: {err}",
        );
        assert_eq!(
            db.state().reviews[&review.id].status,
            review::Status::Approved,
        );
    }
}
