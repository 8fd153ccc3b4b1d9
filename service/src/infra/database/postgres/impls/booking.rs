//! [`Booking`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Insert, Lock, Select, Update},
    Money,
};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{booking, package, Booking, Guest},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of a [`Booking`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, vacation_id, package_id, guest_name, guest_email, guest_phone, \
    adults, children, check_in, nights, price, price_currency, status, \
    order_id, created_at";

/// Maps the provided [`Row`] into a [`Booking`].
fn from_row(row: &Row) -> Booking {
    Booking {
        id: row.get("id"),
        vacation_id: row.get("vacation_id"),
        package_id: row.get("package_id"),
        guest: Guest {
            name: row.get("guest_name"),
            email: row.get("guest_email"),
            phone: row.get("guest_phone"),
        },
        adults: u16::try_from(row.get::<_, i32>("adults"))
            .expect("`adults` overflow"),
        children: u16::try_from(row.get::<_, i32>("children"))
            .expect("`children` overflow"),
        check_in: row.get("check_in"),
        nights: u16::try_from(row.get::<_, i32>("nights"))
            .ok()
            .and_then(package::Nights::new)
            .expect("invalid `nights`"),
        price: Money {
            amount: row.get("price"),
            currency: row.get("price_currency"),
        },
        status: row.get("status"),
        order_id: row.get("order_id"),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<booking::Id, Booking>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[booking::Id]>,
{
    type Ok = HashMap<booking::Id, Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<booking::Id, Booking>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[booking::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM bookings \
             WHERE id = ANY($1::UUID[])",
        );
        Ok(self
            .query(&sql, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let booking = from_row(row);
                (booking.id, booking)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Booking>, booking::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<booking::Id, Booking>, [booking::Id; 1]>>,
        Ok = HashMap<booking::Id, Booking>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Booking>, booking::CreationDateTime>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    /// Selects [`booking::Status::Pending`] [`Booking`]s not being a part of
    /// any [`Order`] and created before the provided deadline.
    ///
    /// [`Order`]: crate::domain::Order
    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, booking::CreationDateTime>>,
    ) -> Result<Self::Ok, Self::Err> {
        let deadline: booking::CreationDateTime = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM bookings \
             WHERE status = $1::INT2 \
               AND order_id IS NULL \
               AND created_at < $2::TIMESTAMPTZ \
             ORDER BY created_at ASC",
        );
        Ok(self
            .query(&sql, &[&booking::Status::Pending, &deadline])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Booking>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(booking)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Booking>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(booking): Update<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let Booking {
            id,
            vacation_id,
            package_id,
            guest,
            adults,
            children,
            check_in,
            nights,
            price,
            status,
            order_id,
            created_at,
        } = booking;

        let adults = i32::from(adults);
        let children = i32::from(children);
        let nights = i32::from(nights.get());

        const SQL: &str = "\
            INSERT INTO bookings (\
                id, vacation_id, package_id, \
                guest_name, guest_email, guest_phone, \
                adults, children, check_in, nights, \
                price, price_currency, status, order_id, created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, \
                $4::VARCHAR, $5::VARCHAR, $6::VARCHAR, \
                $7::INT4, $8::INT4, $9::TIMESTAMPTZ, $10::INT4, \
                $11::NUMERIC, $12::INT2, $13::INT2, $14::UUID, \
                $15::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET status = EXCLUDED.status, \
                order_id = EXCLUDED.order_id";
        self.exec(
            SQL,
            &[
                &id,
                &vacation_id,
                &package_id,
                &guest.name,
                &guest.email,
                &guest.phone,
                &adults,
                &children,
                &check_in,
                &nights,
                &price.amount,
                &price.currency,
                &status,
                &order_id,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Lock<By<Booking, booking::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Booking, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: booking::Id = by.into_inner();

        const SQL: &str = "\
            INSERT INTO bookings_lock \
            VALUES ($1::UUID) \
            ON CONFLICT (id) DO NOTHING";
        self.query(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<
        Select<By<read::booking::list::Page, read::booking::list::Selector>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::booking::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::booking::list::Page, read::booking::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::booking::list::Selector {
            arguments,
            filter:
                read::booking::list::Filter {
                    status,
                    vacation_id,
                    email,
                },
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
        let vacation_idx = vacation_id.as_ref().map(|v| {
            ps.push(v);
            ps.len()
        });
        let email_idx = email.as_ref().map(|e| {
            ps.push(e);
            ps.len()
        });

        let sql = format!(
            "SELECT id \
             FROM bookings \
             WHERE true \
                   {cursor} \
                   {status_filtering} \
                   {vacation_filtering} \
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
            vacation_filtering =
                vacation_idx.into_iter().format_with("", |idx, f| {
                    f(&format_args!("AND vacation_id = ${idx}::UUID"))
                }),
            email_filtering = email_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND guest_email = ${idx}::VARCHAR"))
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

        Ok(read::booking::list::Page::new(&arguments, edges, has_more))
    }
}
