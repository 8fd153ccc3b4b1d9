//! [`Order`]-related [`Database`] implementations.

use common::{
    operations::{By, Insert, Lock, Select, Update},
    Currency, Money,
};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{order, Order},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of an [`Order`] to be mapped with [`from_row()`].
///
/// [`Booking`]s of an [`Order`] are referenced by their `order_id` column.
///
/// [`Booking`]: crate::domain::Booking
const COLUMNS: &str = "\
    id, email, voucher_id, subtotal, discount, total, currency, status, \
    created_at, paid_at, \
    ARRAY(SELECT id \
          FROM bookings \
          WHERE order_id = orders.id \
          ORDER BY created_at ASC, id ASC) AS bookings";

/// Maps the provided [`Row`] into an [`Order`].
fn from_row(row: &Row) -> Order {
    let currency: Currency = row.get("currency");
    Order {
        id: row.get("id"),
        email: row.get("email"),
        bookings: row.get("bookings"),
        voucher_id: row.get("voucher_id"),
        subtotal: Money {
            amount: row.get("subtotal"),
            currency,
        },
        discount: Money {
            amount: row.get("discount"),
            currency,
        },
        total: Money {
            amount: row.get("total"),
            currency,
        },
        status: row.get("status"),
        created_at: row.get("created_at"),
        paid_at: row.get("paid_at"),
    }
}

impl<C> Database<Select<By<Option<Order>, order::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Order>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Order>, order::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: order::Id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM orders \
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

impl<C> Database<Insert<Order>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Order>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(order): Insert<Order>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(order)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Order>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    /// Upserts the provided [`Order`].
    ///
    /// [`Order::bookings`] are ignored, as [`Booking`]s reference their
    /// [`Order`] on their own.
    ///
    /// [`Booking`]: crate::domain::Booking
    async fn execute(
        &self,
        Update(order): Update<Order>,
    ) -> Result<Self::Ok, Self::Err> {
        let Order {
            id,
            email,
            bookings: _,
            voucher_id,
            subtotal,
            discount,
            total,
            status,
            created_at,
            paid_at,
        } = order;

        const SQL: &str = "\
            INSERT INTO orders (\
                id, email, voucher_id, subtotal, discount, total, currency, \
                status, created_at, paid_at\
            ) VALUES (\
                $1::UUID, $2::VARCHAR, $3::UUID, \
                $4::NUMERIC, $5::NUMERIC, $6::NUMERIC, $7::INT2, \
                $8::INT2, $9::TIMESTAMPTZ, $10::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET status = EXCLUDED.status, \
                paid_at = EXCLUDED.paid_at";
        self.exec(
            SQL,
            &[
                &id,
                &email,
                &voucher_id,
                &subtotal.amount,
                &discount.amount,
                &total.amount,
                &subtotal.currency,
                &status,
                &created_at,
                &paid_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<Order, order::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Order, order::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: order::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO orders_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<Select<By<read::order::list::Page, read::order::list::Selector>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::order::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::order::list::Page, read::order::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::order::list::Selector {
            arguments,
            filter: read::order::list::Filter { status, email },
        } = by.into_inner();

        let limit = i32::try_from(arguments.limit())
            .unwrap_or(i32::MAX - 1)
            .saturating_add(1);

        let mut ps: Vec<&(dyn ToSql + Sync)> = vec![&limit];

        let cursor_idx = arguments.cursor().map(|c| {
            ps.push(c);
            ps.len()
        });
        let status_idx = status.as_ref().map(|s| {
            ps.push(s);
            ps.len()
        });
        let email_idx = email.as_ref().map(|e| {
            ps.push(e);
            ps.len()
        });

        let sql = format!(
            "SELECT id \
             FROM orders \
             WHERE true \
                   {cursor} \
                   {status_filtering} \
                   {email_filtering} \
             ORDER BY id {order} \
             LIMIT $1::INT4",
            cursor = cursor_idx.into_iter().format_with("", |idx, f| {
                let op = arguments.kind().operator();
                f(&format_args!("AND id {op} ${idx}::UUID"))
            }),
            order = arguments.kind().order().sql(),
            status_filtering =
                status_idx.into_iter().format_with("", |idx, f| {
                    f(&format_args!("AND status = ${idx}::INT2"))
                }),
            email_filtering = email_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND email = ${idx}::VARCHAR"))
            }),
        );
        let rows = self
            .query(&sql, ps.as_slice())
            .await
            .map_err(tracerr::wrap!())?;

        let has_more = rows.len() > arguments.limit();
        let edges = rows
            .into_iter()
            .take(arguments.limit())
            .map(|row| {
                let id = row.get("id");
                (id, id)
            })
            .collect::<Vec<_>>();

        Ok(read::order::list::Page::new(&arguments, edges, has_more))
    }
}
