//! [`Area`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{area, Area},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Maps the provided [`Row`] into an [`Area`].
fn from_row(row: &Row) -> Area {
    Area {
        id: row.get("id"),
        name: row.get("name"),
        country: row.get("country"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<area::Id, Area>, IDs>>> for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[area::Id]>,
{
    type Ok = HashMap<area::Id, Area>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<area::Id, Area>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[area::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        const SQL: &str = "\
            SELECT id, name, country, description, created_at \
            FROM areas \
            WHERE id = ANY($1::UUID[])";
        Ok(self
            .query(SQL, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let area = from_row(row);
                (area.id, area)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Area>, area::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<area::Id, Area>, [area::Id; 1]>>,
        Ok = HashMap<area::Id, Area>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Area>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Area>, area::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Area>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Area>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Area>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, country, description, created_at \
            FROM areas \
            ORDER BY name ASC, id ASC";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Area>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Area>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(area): Insert<Area>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(area)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Area>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(area): Update<Area>,
    ) -> Result<Self::Ok, Self::Err> {
        let Area {
            id,
            name,
            country,
            description,
            created_at,
        } = area;

        const SQL: &str = "\
            INSERT INTO areas (id, name, country, description, created_at) \
            VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, $4::VARCHAR, \
                $5::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET name = EXCLUDED.name, \
                country = EXCLUDED.country, \
                description = EXCLUDED.description";
        self.exec(SQL, &[&id, &name, &country, &description, &created_at])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Area, area::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Area, area::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: area::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM areas \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::area::InUse, area::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::area::InUse;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::area::InUse, area::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let area_id: area::Id = by.into_inner();

        const SQL: &str = "\
            SELECT EXISTS (SELECT 1 FROM lodgings WHERE area_id = $1::UUID) \
                OR EXISTS (SELECT 1 FROM vacations WHERE area_id = $1::UUID) \
               AS in_use";
        self.query_opt(SQL, &[&area_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| {
                read::area::InUse(row.expect("always exists").get("in_use"))
            })
    }
}
