//! [`Voucher`]-related [`Database`] implementations.

use common::operations::{By, Delete, Insert, Lock, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{voucher, Voucher},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of a [`Voucher`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, code, discount, valid_until, max_redemptions, redemptions, \
    created_at";

/// Maps the provided [`Row`] into a [`Voucher`].
fn from_row(row: &Row) -> Voucher {
    Voucher {
        id: row.get("id"),
        code: row.get("code"),
        discount: row.get("discount"),
        valid_until: row.get("valid_until"),
        max_redemptions: row
            .get::<_, Option<i64>>("max_redemptions")
            .map(u32::try_from)
            .transpose()
            .expect("`max_redemptions` overflow"),
        redemptions: u32::try_from(row.get::<_, i64>("redemptions"))
            .expect("`redemptions` overflow"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Voucher>, voucher::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Voucher>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Voucher>, voucher::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: voucher::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM vouchers \
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

impl<C> Database<Select<By<Option<Voucher>, voucher::Code>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<Option<Voucher>, voucher::Id>>,
        Ok = Option<Voucher>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Voucher>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Voucher>, voucher::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let code: voucher::Code = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM vouchers \
            WHERE code = $1::VARCHAR \
            LIMIT 1";
        let Some(row) = self
            .query_opt(SQL, &[&code])
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        self.execute(Select(By::<Option<Voucher>, voucher::Id>::new(
            row.get("id"),
        )))
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Select<By<Vec<Voucher>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Voucher>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Voucher>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM vouchers \
             ORDER BY created_at DESC, id ASC",
        );
        Ok(self
            .query(&sql, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Voucher>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Voucher>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(voucher): Insert<Voucher>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(voucher)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Voucher>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(voucher): Update<Voucher>,
    ) -> Result<Self::Ok, Self::Err> {
        let Voucher {
            id,
            code,
            discount,
            valid_until,
            max_redemptions,
            redemptions,
            created_at,
        } = voucher;

        let max_redemptions = max_redemptions.map(i64::from);
        let redemptions = i64::from(redemptions);

        const SQL: &str = "\
            INSERT INTO vouchers (\
                id, code, discount, valid_until, max_redemptions, \
                redemptions, created_at\
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::NUMERIC, $4::TIMESTAMPTZ, \
                $5::INT8, $6::INT8, \
                $7::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET discount = EXCLUDED.discount, \
                valid_until = EXCLUDED.valid_until, \
                max_redemptions = EXCLUDED.max_redemptions, \
                redemptions = EXCLUDED.redemptions";
        self.exec(
            SQL,
            &[
                &id,
                &code,
                &discount,
                &valid_until,
                &max_redemptions,
                &redemptions,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Voucher, voucher::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Voucher, voucher::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: voucher::Id = by.into_inner();

        const SQL: &str = "\
            DELETE FROM vouchers \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Voucher, voucher::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Voucher, voucher::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: voucher::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO vouchers_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Lock<By<Voucher, voucher::Code>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Voucher, voucher::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let code: voucher::Code = by.into_inner();

        const SQL: &str = "\
            INSERT INTO vouchers_creation_lock \
            VALUES ($1::VARCHAR) \
            ON CONFLICT (code) DO NOTHING";
        self.query(SQL, &[&code])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}
