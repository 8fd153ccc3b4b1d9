//! [`Command`] for creating a new [`Vacation`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{area, lodging, vacation, Area, Lodging, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Vacation`].
///
/// A new [`Vacation`] is always a [`vacation::Status::Draft`].
#[derive(Clone, Debug)]
pub struct CreateVacation {
    /// ID of the [`Area`] a new [`Vacation`] takes place in.
    pub area_id: area::Id,

    /// ID of the [`Lodging`] a new [`Vacation`] offers a stay in.
    pub lodging_id: lodging::Id,

    /// [`vacation::Title`] of a new [`Vacation`].
    pub title: vacation::Title,

    /// [`vacation::Summary`] of a new [`Vacation`].
    pub summary: Option<vacation::Summary>,

    /// Indicator whether a new [`Vacation`] is featured.
    pub is_featured: bool,
}

impl<Db, M> Command<CreateVacation> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Area>, area::Id>>,
            Ok = Option<Area>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Lodging>, lodging::Id>>,
            Ok = Option<Lodging>,
            Err = Traced<database::Error>,
        > + Database<Insert<Vacation>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Vacation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateVacation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateVacation {
            area_id,
            lodging_id,
            title,
            summary,
            is_featured,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = tx
            .execute(Select(By::<Option<Area>, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AreaNotExists(area_id))
            .map_err(tracerr::wrap!())?;
        let lodging = tx
            .execute(Select(By::<Option<Lodging>, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LodgingNotExists(lodging_id))
            .map_err(tracerr::wrap!())?;
        if lodging.area_id != area_id {
            return Err(tracerr::new!(E::LodgingNotInArea(lodging_id)));
        }

        let now = DateTime::now();
        let vacation = Vacation {
            id: vacation::Id::new(),
            area_id,
            lodging_id,
            title,
            summary,
            status: vacation::Status::Draft,
            is_featured,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };
        tx.execute(Insert(vacation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vacation)
    }
}

/// Error of [`CreateVacation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Area`] doesn't exist.
    #[display("`Area(id: {_0})` does not exist")]
    #[from(ignore)]
    AreaNotExists(#[error(not(source))] area::Id),

    /// [`Lodging`] doesn't exist.
    #[display("`Lodging(id: {_0})` does not exist")]
    #[from(ignore)]
    LodgingNotExists(#[error(not(source))] lodging::Id),

    /// [`Lodging`] is located in another [`Area`].
    #[display("`Lodging(id: {_0})` is located in another `Area`")]
    #[from(ignore)]
    LodgingNotInArea(#[error(not(source))] lodging::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{vacation, Area, Lodging},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, CreateVacation, ExecutionError};

    fn create(area: &Area, lodging: &Lodging) -> CreateVacation {
        CreateVacation {
            area_id: area.id,
            lodging_id: lodging.id,
            title: vacation::Title::new("Sunny Coast").unwrap(),
            summary: None,
            is_featured: true,
        }
    }

    #[tokio::test]
    async fn creates_draft() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let db = Mock::with(State {
            areas: [(area.id, area.clone())].into(),
            lodgings: [(lodging.id, lodging.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let created = svc.execute(create(&area, &lodging)).await.unwrap();

        assert_eq!(created.status, vacation::Status::Draft);
        assert!(created.is_featured);
        assert!(db.state().vacations.contains_key(&created.id));
    }

    #[tokio::test]
    async fn refuses_lodging_of_another_area() {
        let (area, other) = (fixture::area(), fixture::area());
        let lodging = fixture::lodging(&other);
        let db = Mock::with(State {
            areas: [(area.id, area.clone()), (other.id, other)].into(),
            lodgings: [(lodging.id, lodging.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create(&area, &lodging))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::LodgingNotInArea(id) if id == lodging.id,
            ),
            "unexpected error: {err}",
        );
        assert!(db.state().vacations.is_empty());
    }

    #[tokio::test]
    async fn refuses_unknown_area() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let db = Mock::with(State {
            lodgings: [(lodging.id, lodging.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create(&area, &lodging))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::AreaNotExists(id) if id == area.id),
            "unexpected error: {err}",
        );
    }
}
