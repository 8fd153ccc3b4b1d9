//! [`Voucher`]-related definitions.

use common::{DateTime, Percent};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// A discount voucher.
#[derive(Clone, Debug, From, Into)]
pub struct Voucher(domain::Voucher);

/// A discount voucher redeemable when placing an `Order`.
#[graphql_object(context = Context)]
impl Voucher {
    /// Unique identifier of this `Voucher`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Code of this `Voucher`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.code",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn code(&self) -> Code {
        self.0.code.clone().into()
    }

    /// Discount granted by this `Voucher`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.discount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn discount(&self) -> Percent {
        self.0.discount
    }

    /// `DateTime` this `Voucher` is valid until.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.validUntil",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn valid_until(&self) -> Option<DateTime> {
        self.0.valid_until.map(|at| at.coerce())
    }

    /// Maximum number of redemptions of this `Voucher`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.maxRedemptions",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn max_redemptions(&self) -> Option<i32> {
        self.0
            .max_redemptions
            .map(|max| i32::try_from(max).unwrap_or(i32::MAX))
    }

    /// Number of times this `Voucher` has been redeemed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.redemptions",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn redemptions(&self) -> i32 {
        i32::try_from(self.0.redemptions).unwrap_or(i32::MAX)
    }

    /// Indicator whether this `Voucher` can be redeemed right now.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.isRedeemable",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn is_redeemable(&self) -> bool {
        self.0.is_redeemable()
    }

    /// `DateTime` when this `Voucher` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Voucher.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Voucher`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::voucher::Id)]
#[into(domain::voucher::Id)]
#[graphql(name = "VoucherId", transparent)]
pub struct Id(Uuid);

/// Code of a `Voucher`, case-insensitive.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "VoucherCode", with = scalar::Via::<domain::voucher::Code>)]
pub struct Code(domain::voucher::Code);
