//! [`Lodging`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Select, Update};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{lodging, media, Lodging},
    infra::{
        database::{
            self,
            postgres::{Connection, FuzzPattern},
            Postgres,
        },
        Database,
    },
    read,
};

/// Maps the provided [`Row`] into a [`Lodging`].
fn from_row(row: &Row) -> Lodging {
    Lodging {
        id: row.get("id"),
        area_id: row.get("area_id"),
        name: row.get("name"),
        kind: row.get("kind"),
        address: row.get("address"),
        description: row.get("description"),
        stars: row.get::<_, Option<i16>>("stars").map(|s| {
            u8::try_from(s)
                .ok()
                .and_then(lodging::Stars::new)
                .expect("invalid `stars`")
        }),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<lodging::Id, Lodging>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[lodging::Id]>,
{
    type Ok = HashMap<lodging::Id, Lodging>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<lodging::Id, Lodging>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[lodging::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        const SQL: &str = "\
            SELECT id, area_id, name, kind, address, description, stars, \
                   created_at \
            FROM lodgings \
            WHERE id = ANY($1::UUID[])";
        Ok(self
            .query(SQL, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let lodging = from_row(row);
                (lodging.id, lodging)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Lodging>, lodging::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<lodging::Id, Lodging>, [lodging::Id; 1]>>,
        Ok = HashMap<lodging::Id, Lodging>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Lodging>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Lodging>, lodging::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Insert<Lodging>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Lodging>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(lodging): Insert<Lodging>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(lodging)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Lodging>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(lodging): Update<Lodging>,
    ) -> Result<Self::Ok, Self::Err> {
        let Lodging {
            id,
            area_id,
            name,
            kind,
            address,
            description,
            stars,
            created_at,
        } = lodging;

        let stars = stars.map(|s| i16::from(s.get()));

        const SQL: &str = "\
            INSERT INTO lodgings (\
                id, area_id, name, kind, address, description, stars, \
                created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::VARCHAR, $4::INT2, $5::VARCHAR, \
                $6::VARCHAR, $7::INT2, \
                $8::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET area_id = EXCLUDED.area_id, \
                name = EXCLUDED.name, \
                kind = EXCLUDED.kind, \
                address = EXCLUDED.address, \
                description = EXCLUDED.description, \
                stars = EXCLUDED.stars";
        self.exec(
            SQL,
            &[
                &id,
                &area_id,
                &name,
                &kind,
                &address,
                &description,
                &stars,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Delete<By<Lodging, lodging::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Lodging, lodging::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: lodging::Id = by.into_inner();

        const MEDIA_SQL: &str = "\
            DELETE FROM media \
            WHERE (owner_kind = $1::INT2 AND owner_id = $2::UUID) \
               OR (owner_kind = $3::INT2 \
                   AND owner_id IN (SELECT id \
                                    FROM rooms \
                                    WHERE lodging_id = $2::UUID))";
        self.exec(
            MEDIA_SQL,
            &[&media::OwnerKind::Lodging, &id, &media::OwnerKind::Room],
        )
        .await
        .map_err(tracerr::wrap!())?;

        // `rooms` are removed by `ON DELETE CASCADE`.
        const SQL: &str = "\
            DELETE FROM lodgings \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Select<By<read::lodging::InUse, lodging::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = read::lodging::InUse;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::lodging::InUse, lodging::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let lodging_id: lodging::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id \
            FROM vacations \
            WHERE lodging_id = $1::UUID \
            LIMIT 1";
        self.query_opt(SQL, &[&lodging_id])
            .await
            .map_err(tracerr::wrap!())
            .map(|r| read::lodging::InUse(r.is_some()))
    }
}

impl<C>
    Database<
        Select<By<read::lodging::list::Page, read::lodging::list::Selector>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::lodging::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::lodging::list::Page, read::lodging::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::lodging::list::Selector {
            arguments,
            filter: read::lodging::list::Filter { area_id, name },
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
        let name_idx = name.as_ref().map(|n| {
            ps.push(n);
            ps.len()
        });

        let name_pattern = name.as_ref().map(|n| FuzzPattern::new(n.as_ref()));
        let name_pattern_idx = name_pattern.as_ref().map(|n| {
            ps.push(n);
            ps.len()
        });

        let sql = format!(
            "SELECT id \
             FROM lodgings \
             WHERE true \
                   {cursor} \
                   {area_filtering} \
                   {name_filtering} \
             ORDER BY {name_ordering} \
                      id {order} \
             LIMIT $1::INT4",
            cursor = cursor_idx.into_iter().format_with("", |idx, f| {
                let op = arguments.kind().operator();
                f(&format_args!("AND id {op} ${idx}::UUID"))
            }),
            order = arguments.kind().order().sql(),
            area_filtering = area_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND area_id = ${idx}::UUID"))
            }),
            name_filtering =
                name_pattern_idx.into_iter().format_with("", |idx, f| {
                    f(&format_args!(
                        "AND LOWER(name) SIMILAR TO LOWER(${idx}::VARCHAR)"
                    ))
                }),
            name_ordering = name_idx.into_iter().format_with("", |idx, f| {
                let order = arguments.kind().order().sql();
                f(&format_args!(
                    "LEVENSHTEIN(name, ${idx}::VARCHAR, 1, 1, 0) {order},"
                ))
            })
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

        Ok(read::lodging::list::Page::new(&arguments, edges, has_more))
    }
}

impl<C>
    Database<
        Select<
            By<read::lodging::list::TotalCount, read::lodging::list::Filter>,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::lodging::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::lodging::list::TotalCount, read::lodging::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::lodging::list::Filter { area_id, name } = by.into_inner();

        let name_pattern = name.as_ref().map(|n| FuzzPattern::new(n.as_ref()));

        const SQL: &str = "\
            SELECT COUNT(*)::INT4 \
            FROM lodgings \
            WHERE ($1::UUID IS NULL OR area_id = $1::UUID) \
              AND ($2::VARCHAR IS NULL \
                   OR LOWER(name) SIMILAR TO LOWER($2::VARCHAR))";
        self.query_opt(SQL, &[&area_id, &name_pattern])
            .await
            .map_err(tracerr::wrap!())
            .map(|row| row.expect("always exists").get::<_, i32>(0).into())
    }
}
