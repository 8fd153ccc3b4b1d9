//! [`Template`]-related definitions.

use std::future;

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A reusable text template.
#[derive(Clone, Debug)]
pub struct Template {
    /// ID of this [`Template`].
    id: Id,

    /// Underlying [`domain::Template`].
    template: OnceCell<domain::Template>,
}

impl From<domain::Template> for Template {
    fn from(template: domain::Template) -> Self {
        Self {
            id: template.id.into(),
            template: OnceCell::new_with(Some(template)),
        }
    }
}

impl Template {
    /// Creates a new [`Template`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Template`] with the provided ID exists,
    /// otherwise accessing this [`Template`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            template: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Template`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Template`] doesn't exist.
    async fn template(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Template, Error> {
        let id = self.id.into();
        self.template
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::template::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|t| {
                        future::ready(t.ok_or_else(|| {
                            api::query::TemplateError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A reusable text (title, description or terms) attached to `Vacation`s.
#[graphql_object(context = Context)]
impl Template {
    /// Unique identifier of this `Template`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Template.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Kind of this `Template`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Template.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn kind(&self, ctx: &Context) -> Result<Kind, Error> {
        Ok(self.template(ctx).await?.kind.into())
    }

    /// Name of this `Template`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Template.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<Name, Error> {
        Ok(self.template(ctx).await?.name.clone().into())
    }

    /// Content of this `Template`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Template.content",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn content(&self, ctx: &Context) -> Result<Content, Error> {
        Ok(self.template(ctx).await?.content.clone().into())
    }

    /// `DateTime` when this `Template` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Template.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.template(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Template`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::template::Id)]
#[into(domain::template::Id)]
#[graphql(name = "TemplateId", transparent)]
pub struct Id(Uuid);

/// Name of a `Template`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "TemplateName", with = scalar::Via::<domain::template::Name>)]
pub struct Name(domain::template::Name);

/// Content of a `Template`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "TemplateContent",
    with = scalar::Via::<domain::template::Content>,
)]
pub struct Content(domain::template::Content);

/// Kind of a `Template`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "TemplateKind")]
pub enum Kind {
    /// A title. A `Vacation` has at most one.
    Title,

    /// A description. A `Vacation` has at most one.
    Description,

    /// Terms and conditions. A `Vacation` may have many.
    Term,
}

impl From<domain::template::Kind> for Kind {
    fn from(kind: domain::template::Kind) -> Self {
        use domain::template::Kind as K;
        match kind {
            K::Title => Self::Title,
            K::Description => Self::Description,
            K::Term => Self::Term,
        }
    }
}

impl From<Kind> for domain::template::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Title => Self::Title,
            Kind::Description => Self::Description,
            Kind::Term => Self::Term,
        }
    }
}

pub mod list {
    //! Definitions related to the [`Template`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::read;

    use super::{Id, Template};
    use crate::{api::scalar, Context};

    /// Cursor for the `Template` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::template::list::Cursor)]
    #[graphql(
        name = "TemplateListCursor",
        with = scalar::Via::<read::template::list::Cursor>,
    )]
    pub struct Cursor(pub read::template::list::Cursor);

    /// Edge in the [`Template`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::template::list::Edge);

    /// Edge in the `Template` list.
    #[graphql_object(name = "TemplateListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `TemplateListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `TemplateListEdge`.
        #[must_use]
        pub fn node(&self) -> Template {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees \
                          `Template` existence"
            )]
            unsafe {
                Template::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Template`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::template::list::Connection);

    /// Connection of the `Template` list.
    #[graphql_object(name = "TemplateListConnection", context = Context)]
    impl Connection {
        /// Edges of this `TemplateListConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.0.edges.iter().copied().map(Into::into).collect()
        }

        /// Information about the page.
        #[must_use]
        pub fn page_info(&self) -> PageInfo {
            PageInfo {
                info: self.0.page_info(),
                start_cursor: self.0.edges.first().map(|e| e.cursor.into()),
                end_cursor: self.0.edges.last().map(|e| e.cursor.into()),
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Copy, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::template::list::PageInfo`].
        info: read::template::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about a `TemplateListConnection` page.
    #[graphql_object(name = "TemplateListPageInfo", context = Context)]
    impl PageInfo {
        /// Indicator whether there is a next page.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.info.has_next_page
        }

        /// Indicator whether there is a previous page.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.info.has_previous_page
        }

        /// Start cursor of the page.
        #[must_use]
        pub fn start_cursor(&self) -> &Option<Cursor> {
            &self.start_cursor
        }

        /// End cursor of the page.
        #[must_use]
        pub fn end_cursor(&self) -> &Option<Cursor> {
            &self.end_cursor
        }
    }
}
