//! [`Media`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;
use uuid::Uuid;

use crate::{
    domain::{media, Media},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of a [`Media`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, owner_kind, owner_id, kind, url, caption, position, created_at";

/// Maps the provided [`Row`] into a [`Media`].
fn from_row(row: &Row) -> Media {
    Media {
        id: row.get("id"),
        owner: media::Owner::from_parts(
            row.get("owner_kind"),
            row.get::<_, Uuid>("owner_id"),
        ),
        kind: row.get("kind"),
        url: row.get("url"),
        caption: row.get("caption"),
        position: u16::try_from(row.get::<_, i32>("position"))
            .expect("`position` overflow"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Media>, media::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Media>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Media>, media::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: media::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM media \
             WHERE id = $1::UUID",
        );
        Ok(self
            .query_opt(&sql, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Select<By<Vec<Media>, media::Owner>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Media>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Media>, media::Owner>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM media \
             WHERE owner_kind = $1::INT2 \
               AND owner_id = $2::UUID \
             ORDER BY position ASC, created_at ASC",
        );
        Ok(self
            .query(&sql, &[&owner.kind(), &owner.uuid()])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Media>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Media>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(media): Insert<Media>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(media)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Media>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(media): Update<Media>,
    ) -> Result<Self::Ok, Self::Err> {
        let Media {
            id,
            owner,
            kind,
            url,
            caption,
            position,
            created_at,
        } = media;

        let position = i32::from(position);

        const SQL: &str = "\
            INSERT INTO media (\
                id, owner_kind, owner_id, kind, url, caption, position, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::INT2, $3::UUID, $4::INT2, $5::VARCHAR, \
                $6::VARCHAR, $7::INT4, \
                $8::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET url = EXCLUDED.url, \
                caption = EXCLUDED.caption, \
                position = EXCLUDED.position";
        self.exec(
            SQL,
            &[
                &id,
                &owner.kind(),
                &owner.uuid(),
                &kind,
                &url,
                &caption,
                &position,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Media, media::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Media, media::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: media::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM media \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
