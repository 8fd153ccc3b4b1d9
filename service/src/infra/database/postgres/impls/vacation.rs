//! [`Vacation`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Select, Update};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{media, vacation, Vacation},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of a [`Vacation`] to be mapped with [`from_row()`].
const COLUMNS: &str = "\
    id, area_id, lodging_id, title, summary, status, is_featured, \
    created_at, updated_at";

/// Maps the provided [`Row`] into a [`Vacation`].
fn from_row(row: &Row) -> Vacation {
    Vacation {
        id: row.get("id"),
        area_id: row.get("area_id"),
        lodging_id: row.get("lodging_id"),
        title: row.get("title"),
        summary: row.get("summary"),
        status: row.get("status"),
        is_featured: row.get("is_featured"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<vacation::Id, Vacation>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[vacation::Id]>,
{
    type Ok = HashMap<vacation::Id, Vacation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<vacation::Id, Vacation>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[vacation::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM vacations \
             WHERE id = ANY($1::UUID[])",
        );
        Ok(self
            .query(&sql, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let vacation = from_row(row);
                (vacation.id, vacation)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Vacation>, vacation::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<vacation::Id, Vacation>, [vacation::Id; 1]>>,
        Ok = HashMap<vacation::Id, Vacation>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Vacation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Vacation>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Vacation>, vacation::Status>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Vacation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Vacation>, vacation::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let status: vacation::Status = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM vacations \
             WHERE status = $1::INT2 \
             ORDER BY created_at DESC, id ASC",
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

impl<C> Database<Insert<Vacation>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Vacation>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(vacation): Insert<Vacation>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(vacation)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Vacation>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(vacation): Update<Vacation>,
    ) -> Result<Self::Ok, Self::Err> {
        let Vacation {
            id,
            area_id,
            lodging_id,
            title,
            summary,
            status,
            is_featured,
            created_at,
            updated_at,
        } = vacation;

        const SQL: &str = "\
            INSERT INTO vacations (\
                id, area_id, lodging_id, title, summary, status, \
                is_featured, created_at, updated_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, $4::VARCHAR, $5::VARCHAR, \
                $6::INT2, $7::BOOLEAN, \
                $8::TIMESTAMPTZ, $9::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET area_id = EXCLUDED.area_id, \
                lodging_id = EXCLUDED.lodging_id, \
                title = EXCLUDED.title, \
                summary = EXCLUDED.summary, \
                status = EXCLUDED.status, \
                is_featured = EXCLUDED.is_featured, \
                updated_at = EXCLUDED.updated_at";
        self.exec(
            SQL,
            &[
                &id,
                &area_id,
                &lodging_id,
                &title,
                &summary,
                &status,
                &is_featured,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Vacation, vacation::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Vacation, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: vacation::Id = by.into_inner();

        const MEDIA_SQL: &str = "\
            DELETE FROM media \
            WHERE owner_kind = $1::INT2 \
              AND owner_id = $2::UUID";
        self.exec(MEDIA_SQL, &[&media::OwnerKind::Vacation, &id])
            .await
            .map_err(tracerr::wrap!())?;

        // `packages`, `reviews` and `vacation_templates` rows are removed by
        // `ON DELETE CASCADE`.
        const SQL: &str = "\
            DELETE FROM vacations \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::vacation::HasBookings, vacation::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = read::vacation::HasBookings;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::vacation::HasBookings, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let vacation_id: vacation::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM bookings \
            WHERE vacation_id = $1::UUID \
            LIMIT 1";
        self.query_opt(SQL, &[&vacation_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|r| read::vacation::HasBookings(r.is_some()))
    }
}

impl<C> Database<Insert<vacation::TemplateLink>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(link): Insert<vacation::TemplateLink>,
    ) -> Result<Self::Ok, Self::Err> {
        let vacation::TemplateLink {
            vacation_id,
            template_id,
        } = link;

        const SQL: &str = "\
            INSERT INTO vacation_templates (vacation_id, template_id) \
            VALUES ($1::UUID, $2::UUID) \
            ON CONFLICT (vacation_id, template_id) DO NOTHING";
        self.exec(SQL, &[&vacation_id, &template_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<vacation::TemplateLink>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(link): Delete<vacation::TemplateLink>,
    ) -> Result<Self::Ok, Self::Err> {
        let vacation::TemplateLink {
            vacation_id,
            template_id,
        } = link;

        const SQL: &str = "\
            DELETE FROM vacation_templates \
            WHERE vacation_id = $1::UUID \
              AND template_id = $2::UUID";
        self.exec(SQL, &[&vacation_id, &template_id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<
        Select<By<read::vacation::list::Page, read::vacation::list::Selector>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::vacation::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::vacation::list::Page, read::vacation::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::vacation::list::Selector {
            arguments,
            filter:
                read::vacation::list::Filter {
                    area_id,
                    status,
                    is_featured,
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
        let area_idx = area_id.as_ref().map(|a| {
            ps.push(a);
            ps.len()
        });
        let status_idx = status.as_ref().map(|s| {
            ps.push(s);
            ps.len()
        });
        let featured_idx = is_featured.as_ref().map(|f| {
            ps.push(f);
            ps.len()
        });

        let sql = format!(
            "SELECT id \
             FROM vacations \
             WHERE true \
                   {cursor} \
                   {area_filtering} \
                   {status_filtering} \
                   {featured_filtering} \
             ORDER BY id {order} \
             LIMIT $1::INT4",
            cursor = cursor_idx.into_iter().format_with("", |idx, f| {
                let op = arguments.kind().operator();
                f(&format_args!("AND id {op} ${idx}::UUID"))
            }),
            order = arguments.kind().order().sql(),
            area_filtering = area_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND area_id = ${idx}::UUID"))
            }),
            status_filtering =
                status_idx.into_iter().format_with("", |idx, f| {
                    f(&format_args!("AND status = ${idx}::INT2"))
                }),
            featured_filtering =
                featured_idx.into_iter().format_with("", |idx, f| {
                    f(&format_args!("AND is_featured = ${idx}::BOOLEAN"))
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

        Ok(read::vacation::list::Page::new(&arguments, edges, has_more))
    }
}

impl<C>
    Database<
        Select<
            By<read::vacation::list::TotalCount, read::vacation::list::Filter>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::vacation::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::vacation::list::TotalCount, read::vacation::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::vacation::list::Filter {
            area_id,
            status,
            is_featured,
        } = by.into_inner();

        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM vacations \
            WHERE ($1::UUID IS NULL OR area_id = $1::UUID) \
              AND ($2::INT2 IS NULL OR status = $2::INT2) \
              AND ($3::BOOLEAN IS NULL OR is_featured = $3::BOOLEAN)";
        self.query_opt(SQL, &[&area_id, &status, &is_featured])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}
