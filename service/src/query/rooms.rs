//! [`Query`] collection related to the multiple [`Room`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{lodging, Room},
    infra::{database, Database},
    Query, Service,
};
#[cfg(doc)]
use crate::domain::Lodging;

use super::DatabaseQuery;

/// Queries all the [`Room`]s of a [`Lodging`], ordered by their names.
pub type ByLodging = DatabaseQuery<By<Vec<Room>, lodging::Id>>;

/// [`Query`] of the [`Room`]s of a [`Lodging`] fitting the provided number of
/// guests, the cheapest first.
#[derive(Clone, Copy, Debug)]
pub struct Available {
    /// ID of the [`Lodging`] to look for [`Room`]s in.
    pub lodging_id: lodging::Id,

    /// Number of guests to fit.
    pub guests: u16,
}

impl<Db, M> Query<Available> for Service<Db, M>
where
    Db: Database<
        Select<By<Vec<Room>, lodging::Id>>,
        Ok = Vec<Room>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Available { lodging_id, guests }: Available,
    ) -> Result<Self::Ok, Self::Err> {
        let mut rooms = self
            .database()
            .execute(Select(By::<Vec<Room>, _>::new(lodging_id)))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .filter(|r| r.fits(guests))
            .collect::<Vec<_>>();
        rooms.sort_by(|a, b| {
            a.price_per_night
                .cmp_by_currency(&b.price_per_night)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(rooms)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
        Query as _,
    };

    use super::Available;

    #[tokio::test]
    async fn lists_fitting_rooms_cheapest_first() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let price = |s: &str| s.parse::<Money>().unwrap();
        let suite = fixture::room(&lodging, price("200USD"), 4);
        let double = fixture::room(&lodging, price("100USD"), 2);
        let euro = fixture::room(&lodging, price("50EUR"), 3);
        let single = fixture::room(&lodging, price("10USD"), 1);
        let elsewhere =
            fixture::room(&fixture::lodging(&area), price("1USD"), 4);
        let db = Mock::with(State {
            rooms: [&suite, &double, &euro, &single, &elsewhere]
                .into_iter()
                .map(|r| (r.id, r.clone()))
                .collect(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let rooms = svc
            .execute(Available {
                lodging_id: lodging.id,
                guests: 2,
            })
            .await
            .unwrap();

        assert_eq!(
            rooms.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![double.id, suite.id, euro.id],
        );
    }
}
