//! [`Query`] collection related to the multiple [`Review`]s.

use common::operations::{By, Select};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Vacation;
use crate::{
    domain::{review, vacation, Review},
    infra::{database, Database},
    read, Query, Service,
};

use super::DatabaseQuery;

/// Queries the approved [`Review`]s of a [`Vacation`], the newest first.
pub type ByVacation = DatabaseQuery<By<Vec<Review>, vacation::Id>>;

/// [`Query`] of the [`read::review::Summary`] of a [`Vacation`].
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    /// ID of the [`Vacation`] to summarize [`Review`]s of.
    pub vacation_id: vacation::Id,
}

impl<Db, M> Query<Summary> for Service<Db, M>
where
    Db: Database<
        Select<By<Vec<Review>, vacation::Id>>,
        Ok = Vec<Review>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::review::Summary;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Summary { vacation_id }: Summary,
    ) -> Result<Self::Ok, Self::Err> {
        let reviews = self
            .database()
            .execute(Select(By::<Vec<Review>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(read::review::Summary::of(&reviews))
    }
}

/// [`Query`] of the [`review::Status::Pending`] [`Review`]s awaiting
/// moderation, the oldest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pending;

impl<Db, M> Query<Pending> for Service<Db, M>
where
    Db: Database<
        Select<By<Vec<Review>, review::Status>>,
        Ok = Vec<Review>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Review>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Pending) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(By::<Vec<Review>, _>::new(
                review::Status::Pending,
            )))
            .await
            .map_err(tracerr::wrap!())
    }
}
