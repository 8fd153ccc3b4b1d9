//! [`Review`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{review, vacation, Review},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of a [`Review`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, vacation_id, author, rating, comment, status, created_at";

/// Maps the provided [`Row`] into a [`Review`].
fn from_row(row: &Row) -> Review {
    Review {
        id: row.get("id"),
        vacation_id: row.get("vacation_id"),
        author: row.get("author"),
        rating: u8::try_from(row.get::<_, i16>("rating"))
            .ok()
            .and_then(review::Rating::new)
            .expect("invalid `rating`"),
        comment: row.get("comment"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Review>, review::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Review>, review::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: review::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM reviews \
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

impl<C> Database<Select<By<Vec<Review>, vacation::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Review>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let vacation_id: vacation::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM reviews \
             WHERE vacation_id = $1::UUID \
               AND status = $2::INT2 \
             ORDER BY created_at DESC, id ASC",
        );
        Ok(self
            .query(&sql, &[&vacation_id, &review::Status::Approved])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Vec<Review>, review::Status>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Review>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Review>, review::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let status: review::Status = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM reviews \
             WHERE status = $1::INT2 \
             ORDER BY created_at ASC, id ASC",
        );
        Ok(self
            .query(&sql, &[&status])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Review>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Review>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(review): Insert<Review>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(review)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Review>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(review): Update<Review>,
    ) -> Result<Self::Ok, Self::Err> {
        let Review {
            id,
            vacation_id,
            author,
            rating,
            comment,
            status,
            created_at,
        } = review;

        let rating = i16::from(rating.get());

        const SQL: &str = "\
            INSERT INTO reviews (\
                id, vacation_id, author, rating, comment, status, created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, $4::INT2, $5::VARCHAR, \
                $6::INT2, $7::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET status = EXCLUDED.status";
        self.exec(
            SQL,
            &[
                &id,
                &vacation_id,
                &author,
                &rating,
                &comment,
                &status,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Review, review::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Review, review::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: review::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM reviews \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
