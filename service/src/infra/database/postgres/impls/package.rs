//! [`Package`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{package, room, vacation, Package},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of a [`Package`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, vacation_id, room_id, name, nights, price, price_currency, \
    max_guests, created_at";

/// Maps the provided [`Row`] into a [`Package`].
fn from_row(row: &Row) -> Package {
    Package {
        id: row.get("id"),
        vacation_id: row.get("vacation_id"),
        room_id: row.get("room_id"),
        name: row.get("name"),
        nights: u16::try_from(row.get::<_, i32>("nights"))
            .ok()
            .and_then(package::Nights::new)
            .expect("invalid `nights`"),
        price: Money {
            amount: row.get("price"),
            currency: row.get("price_currency"),
        },
        max_guests: u16::try_from(row.get::<_, i32>("max_guests"))
            .ok()
            .and_then(room::Capacity::new)
            .expect("invalid `max_guests`"),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<package::Id, Package>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[package::Id]>,
{
    type Ok = HashMap<package::Id, Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<package::Id, Package>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[package::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM packages \
             WHERE id = ANY($1::UUID[])",
        );
        Ok(self
            .query(&sql, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let package = from_row(row);
                (package.id, package)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Package>, package::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<package::Id, Package>, [package::Id; 1]>>,
        Ok = HashMap<package::Id, Package>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Package>, package::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Package>, Vec<vacation::Id>>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Package>, Vec<vacation::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let vacation_ids = by.into_inner();
        if vacation_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM packages \
             WHERE vacation_id = ANY($1::UUID[]) \
             ORDER BY price ASC, id ASC",
        );
        Ok(self
            .query(&sql, &[&vacation_ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Package>, vacation::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<Vec<Package>, Vec<vacation::Id>>>,
        Ok = Vec<Package>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Package>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let vacation_id = by.into_inner();
        self.execute(Select(By::<Vec<Package>, _>::new(vec![vacation_id])))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Insert<Package>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Package>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(package): Insert<Package>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(package)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Package>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(package): Update<Package>,
    ) -> Result<Self::Ok, Self::Err> {
        let Package {
            id,
            vacation_id,
            room_id,
            name,
            nights,
            price,
            max_guests,
            created_at,
        } = package;

        let nights = i32::from(nights.get());
        let max_guests = i32::from(max_guests.get());

        const SQL: &str = "\
            INSERT INTO packages (\
                id, vacation_id, room_id, name, nights, \
                price, price_currency, max_guests, created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, $4::VARCHAR, $5::INT4, \
                $6::NUMERIC, $7::INT2, $8::INT4, \
                $9::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET room_id = EXCLUDED.room_id, \
                name = EXCLUDED.name, \
                nights = EXCLUDED.nights, \
                price = EXCLUDED.price, \
                price_currency = EXCLUDED.price_currency, \
                max_guests = EXCLUDED.max_guests";
        self.exec(
            SQL,
            &[
                &id,
                &vacation_id,
                &room_id,
                &name,
                &nights,
                &price.amount,
                &price.currency,
                &max_guests,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Package, package::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Package, package::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: package::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM packages \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::package::HasBookings, package::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::package::HasBookings;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::package::HasBookings, package::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let package_id: package::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM bookings \
            WHERE package_id = $1::UUID \
            LIMIT 1";
        self.query_opt(SQL, &[&package_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|r| read::package::HasBookings(r.is_some()))
    }
}
