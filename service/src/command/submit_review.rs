//! [`Command`] for submitting a new [`Review`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{review, vacation, Review, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`Review`] of a published [`Vacation`].
///
/// A new [`Review`] awaits moderation before being shown.
#[derive(Clone, Debug)]
pub struct SubmitReview {
    /// ID of the reviewed [`Vacation`].
    pub vacation_id: vacation::Id,

    /// [`review::Author`] of a new [`Review`].
    pub author: review::Author,

    /// [`review::Rating`] of a new [`Review`].
    pub rating: review::Rating,

    /// [`review::Comment`] of a new [`Review`].
    pub comment: Option<review::Comment>,
}

impl<Db, M> Command<SubmitReview> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<Insert<Review>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Review;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitReview,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitReview {
            vacation_id,
            author,
            rating,
            comment,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let vacation = tx
            .execute(Select(By::<Option<Vacation>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VacationNotExists(vacation_id))
            .map_err(tracerr::wrap!())?;
        if !vacation.is_published() {
            return Err(tracerr::new!(E::VacationNotPublished(vacation_id)));
        }

        let review = Review {
            id: review::Id::new(),
            vacation_id,
            author,
            rating,
            comment,
            status: review::Status::Pending,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(review.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(review)
    }
}

/// Error of [`SubmitReview`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Vacation`] isn't published.
    #[display("`Vacation(id: {_0})` is not published")]
    #[from(ignore)]
    VacationNotPublished(#[error(not(source))] vacation::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{review, vacation, Vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, SubmitReview};

    fn submit(vacation: &Vacation) -> SubmitReview {
        SubmitReview {
            vacation_id: vacation.id,
            author: review::Author::new("Jane").unwrap(),
            rating: review::Rating::new(4).unwrap(),
            comment: Some(review::Comment::new("Lovely").unwrap()),
        }
    }

    #[tokio::test]
    async fn submits_pending_review() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let submitted = svc.execute(submit(&vacation)).await.unwrap();

        assert_eq!(submitted.status, review::Status::Pending);
        assert_eq!(submitted.vacation_id, vacation.id);
        assert!(db.state().reviews.contains_key(&submitted.id));
    }

    #[tokio::test]
    async fn refuses_unpublished_vacation() {
        let vacation = fixture::vacation(vacation::Status::Draft);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(submit(&vacation))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::VacationNotPublished(id) if id == vacation.id,
            ),
            "unexpected error: {err}",
        );
        assert!(db.state().reviews.is_empty());
    }
}
