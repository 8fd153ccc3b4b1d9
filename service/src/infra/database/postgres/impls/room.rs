//! [`Room`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Delete, Insert, Select, Update},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{lodging, media, room, Room},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of a [`Room`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, lodging_id, name, capacity, price, price_currency, created_at, \
    ARRAY(SELECT amenity_id \
          FROM room_amenities \
          WHERE room_id = rooms.id \
          ORDER BY amenity_id) AS amenities";

/// Maps the provided [`Row`] into a [`Room`].
fn from_row(row: &Row) -> Room {
    Room {
        id: row.get("id"),
        lodging_id: row.get("lodging_id"),
        name: row.get("name"),
        capacity: u16::try_from(row.get::<_, i32>("capacity"))
            .ok()
            .and_then(room::Capacity::new)
            .expect("invalid `capacity`"),
        price_per_night: Money {
            amount: row.get("price"),
            currency: row.get("price_currency"),
        },
        amenities: row.get("amenities"),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<room::Id, Room>, IDs>>> for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[room::Id]>,
{
    type Ok = HashMap<room::Id, Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<room::Id, Room>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[room::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rooms \
             WHERE id = ANY($1::UUID[])",
        );
        Ok(self
            .query(&sql, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let room = from_row(row);
                (room.id, room)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Room>, room::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<room::Id, Room>, [room::Id; 1]>>,
        Ok = HashMap<room::Id, Room>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Room>, lodging::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, lodging::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let lodging_id: lodging::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rooms \
             WHERE lodging_id = $1::UUID \
             ORDER BY name ASC, id ASC",
        );
        Ok(self
            .query(&sql, &[&lodging_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Room>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Room>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(room): Insert<Room>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(room)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Room>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(room): Update<Room>,
    ) -> Result<Self::Ok, Self::Err> {
        let Room {
            id,
            lodging_id,
            name,
            capacity,
            price_per_night,
            amenities,
            created_at,
        } = room;

        let capacity = i32::from(capacity.get());

        const SQL: &str = "\
            INSERT INTO rooms (\
                id, lodging_id, name, capacity, price, price_currency, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, $4::INT4, \
                $5::NUMERIC, $6::INT2, \
                $7::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET lodging_id = EXCLUDED.lodging_id, \
                name = EXCLUDED.name, \
                capacity = EXCLUDED.capacity, \
                price = EXCLUDED.price, \
                price_currency = EXCLUDED.price_currency";
        self.exec(
            SQL,
            &[
                &id,
                &lodging_id,
                &name,
                &capacity,
                &price_per_night.amount,
                &price_per_night.currency,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())?;

        const UNLINK_SQL: &str = "\
            DELETE FROM room_amenities \
            WHERE room_id = $1::UUID \
              AND NOT (amenity_id = ANY($2::UUID[]))";
        self.exec(UNLINK_SQL, &[&id, &amenities])
            .await
            .map_err(tracerr::wrap!())?;

        const LINK_SQL: &str = "\
            INSERT INTO room_amenities (room_id, amenity_id) \
            SELECT $1::UUID, unnest($2::UUID[]) \
            ON CONFLICT (room_id, amenity_id) DO NOTHING";
        self.exec(LINK_SQL, &[&id, &amenities])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Room, room::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Room, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: room::Id = by.into_inner();

        const MEDIA_SQL: &str = "\
            DELETE FROM media \
            WHERE owner_kind = $1::INT2 \
              AND owner_id = $2::UUID";
        self.exec(MEDIA_SQL, &[&media::OwnerKind::Room, &id])
            .await
            .map_err(tracerr::wrap!())?;

        // `room_amenities` rows are removed by `ON DELETE CASCADE`.
        const SQL: &str = "\
            DELETE FROM rooms \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::room::InUse, room::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::room::InUse;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::room::InUse, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let room_id: room::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM packages \
            WHERE room_id = $1::UUID \
            LIMIT 1";
        self.query_opt(SQL, &[&room_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|r| read::room::InUse(r.is_some()))
    }
}
