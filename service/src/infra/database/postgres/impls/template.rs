//! [`Template`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::operations::{By, Delete, Insert, Select, Update};
use itertools::Itertools as _;
use postgres_types::ToSql;
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{template, vacation, Template},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Maps the provided [`Row`] into a [`Template`].
fn from_row(row: &Row) -> Template {
    Template {
        id: row.get("id"),
        kind: row.get("kind"),
        name: row.get("name"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

impl<C, IDs> Database<Select<By<HashMap<template::Id, Template>, IDs>>>
    for Postgres<C>
where
    C: Connection,
    IDs: AsRef<[template::Id]>,
{
    type Ok = HashMap<template::Id, Template>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<template::Id, Template>, IDs>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.into_inner();
        // Avoid subtle change for SQL.
        let ids: &[template::Id] = ids.as_ref();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        const SQL: &str = "\
            SELECT id, kind, name, content, created_at \
            FROM templates \
            WHERE id = ANY($1::UUID[])";
        Ok(self
            .query(SQL, &[&ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(|row| {
                let template = from_row(row);
                (template.id, template)
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Template>, template::Id>>> for Postgres<C>
where
    C: Connection,
    Self: Database<
        Select<By<HashMap<template::Id, Template>, [template::Id; 1]>>,
        Ok = HashMap<template::Id, Template>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Template>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Template>, template::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .execute(Select(By::new([id])))
            .await
            .map_err(tracerr::wrap!())?
            .remove(&id))
    }
}

impl<C> Database<Select<By<Vec<Template>, vacation::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Template>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Template>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let vacation_id: vacation::Id = by.into_inner();

        const SQL: &str = "\
            SELECT t.id, t.kind, t.name, t.content, t.created_at \
            FROM templates AS t \
            INNER JOIN vacation_templates AS vt \
                    ON vt.template_id = t.id \
            WHERE vt.vacation_id = $1::UUID \
            ORDER BY t.kind ASC, t.name ASC, t.id ASC";
        Ok(self
            .query(SQL, &[&vacation_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Template>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Template>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(template): Insert<Template>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(template)).await.map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Template>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(template): Update<Template>,
    ) -> Result<Self::Ok, Self::Err> {
        let Template {
            id,
            kind,
            name,
            content,
            created_at,
        } = template;

        const SQL: &str = "\
            INSERT INTO templates (id, kind, name, content, created_at) \
            VALUES (\
                $1::UUID, $2::INT2, $3::VARCHAR, $4::VARCHAR, \
                $5::TIMESTAMPTZ\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET name = EXCLUDED.name, \
                content = EXCLUDED.content";
        self.exec(SQL, &[&id, &kind, &name, &content, &created_at])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C> Database<Delete<By<Template, template::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Template, template::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: template::Id = by.into_inner();

        // `vacation_templates` rows are removed by `ON DELETE CASCADE`.
        const SQL: &str = "\
            DELETE FROM templates \
            WHERE id = $1::UUID";
        self.exec(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())
            .map(drop)
    }
}

impl<C>
    Database<
        Select<By<read::template::list::Page, read::template::list::Selector>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = read::template::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::template::list::Page, read::template::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::template::list::Selector {
            arguments,
            filter: read::template::list::Filter { kind },
        } = by.into_inner();

        let limit = i32::try_from(arguments.limit())
            .unwrap_or(i32::MAX - 1)
            .saturating_add(1);

        let mut ps: Vec<&(dyn ToSql + Sync)> = vec![&limit];

        let cursor_idx = arguments.cursor().map(|c| {
            ps.push(c);
            ps.len()
        });
        let kind_idx = kind.as_ref().map(|k| {
            ps.push(k);
            ps.len()
        });

        let sql = format!(
            "SELECT id \
             FROM templates \
             WHERE true \
                   {cursor} \
                   {kind_filtering} \
             ORDER BY id {order} \
             LIMIT $1::INT4",
            cursor = cursor_idx.into_iter().format_with("", |idx, f| {
                let op = arguments.kind().operator();
                f(&format_args!("AND id {op} ${idx}::UUID"))
            }),
            order = arguments.kind().order().sql(),
            kind_filtering = kind_idx.into_iter().format_with("", |idx, f| {
                f(&format_args!("AND kind = ${idx}::INT2"))
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

        Ok(read::template::list::Page::new(&arguments, edges, has_more))
    }
}
