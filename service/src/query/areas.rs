//! [`Query`] collection related to the multiple [`Area`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{area, Area},
    infra::{database, Database},
    Query, Service,
};

/// [`Query`] of all the [`Area`]s, ordered by their names, optionally located
/// in a specific country.
#[derive(Clone, Debug, Default)]
pub struct All {
    /// [`area::Country`] the [`Area`]s should be located in.
    ///
    /// Compared case-insensitively.
    pub country: Option<area::Country>,
}

impl<Db, M> Query<All> for Service<Db, M>
where
    Db: Database<
        Select<By<Vec<Area>, ()>>,
        Ok = Vec<Area>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Area>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        All { country }: All,
    ) -> Result<Self::Ok, Self::Err> {
        let areas = self
            .database()
            .execute(Select(By::<Vec<Area>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(match country {
            Some(c) => areas
                .into_iter()
                .filter(|a| {
                    a.country.as_ref().to_lowercase()
                        == c.as_ref().to_lowercase()
                })
                .collect(),
            None => areas,
        })
    }
}
