//! GraphQL [`Mutation`]s definitions.

use common::{DateTime, Money, Percent};
use juniper::graphql_object;
use service::{command, domain, Command as _};
use uuid::Uuid;

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new `Amenity`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createAmenity",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_amenity(
        name: api::amenity::Name,
        description: Option<api::amenity::Description>,
        ctx: &Context,
    ) -> Result<api::Amenity, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::CreateAmenity {
                name: name.into(),
                description: description.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Amenity` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMENITY_NOT_EXISTS` - the `Amenity` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateAmenity",
            id = %id,
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_amenity(
        id: api::amenity::Id,
        name: api::amenity::Name,
        description: Option<api::amenity::Description>,
        ctx: &Context,
    ) -> Result<api::Amenity, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::UpdateAmenity {
                amenity_id: id.into(),
                name: name.into(),
                description: description.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Amenity` with the specified ID, detaching it from all the
    /// `Room`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMENITY_NOT_EXISTS` - the `Amenity` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteAmenity",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_amenity(
        id: api::amenity::Id,
        ctx: &Context,
    ) -> Result<api::Amenity, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteAmenity { amenity_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Area`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            country = %country,
            gql.name = "createArea",
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_area(
        name: api::area::Name,
        country: api::area::Country,
        description: Option<api::area::Description>,
        ctx: &Context,
    ) -> Result<api::Area, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::CreateArea {
                name: name.into(),
                country: country.into(),
                description: description.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Area` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does not exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            country = %country,
            gql.name = "updateArea",
            id = %id,
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_area(
        id: api::area::Id,
        name: api::area::Name,
        country: api::area::Country,
        description: Option<api::area::Description>,
        ctx: &Context,
    ) -> Result<api::Area, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::UpdateArea {
                area_id: id.into(),
                name: name.into(),
                country: country.into(),
                description: description.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Area` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does not exist;
    /// - `AREA_IN_USE` - the `Area` is referenced by `Lodging`s or `Vacation`s;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteArea",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_area(
        id: api::area::Id,
        ctx: &Context,
    ) -> Result<api::Area, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteArea { area_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Lodging` in the specified `Area`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does not exist;
    /// - `INVALID_STARS` - the `stars` are out of `1..=5` range;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            area_id = %area_id,
            gql.name = "createLodging",
            kind = ?kind,
            name = %name,
            otel.name = Self::SPAN_NAME,
            stars = ?stars,
        ),
    )]
    pub async fn create_lodging(
        area_id: api::area::Id,
        name: api::lodging::Name,
        kind: api::lodging::Kind,
        address: api::lodging::Address,
        description: Option<api::lodging::Description>,
        stars: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Lodging, Error> {
        ctx.authorize_admin().await?;

        let stars = stars
            .map(api::lodging::stars)
            .transpose()
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateLodging {
                area_id: area_id.into(),
                name: name.into(),
                kind: kind.into(),
                address: address.into(),
                description: description.map(Into::into),
                stars,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Lodging` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LODGING_NOT_EXISTS` - the `Lodging` with the specified ID does not
    ///   exist;
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does not exist;
    /// - `INVALID_STARS` - the `stars` are out of `1..=5` range;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            area_id = %area_id,
            gql.name = "updateLodging",
            id = %id,
            kind = ?kind,
            name = %name,
            otel.name = Self::SPAN_NAME,
            stars = ?stars,
        ),
    )]
    pub async fn update_lodging(
        id: api::lodging::Id,
        area_id: api::area::Id,
        name: api::lodging::Name,
        kind: api::lodging::Kind,
        address: api::lodging::Address,
        description: Option<api::lodging::Description>,
        stars: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Lodging, Error> {
        ctx.authorize_admin().await?;

        let stars = stars
            .map(api::lodging::stars)
            .transpose()
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateLodging {
                lodging_id: id.into(),
                area_id: area_id.into(),
                name: name.into(),
                kind: kind.into(),
                address: address.into(),
                description: description.map(Into::into),
                stars,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Lodging` with the specified ID along with its `Room`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LODGING_NOT_EXISTS` - the `Lodging` with the specified ID does not
    ///   exist;
    /// - `LODGING_IN_USE` - the `Lodging` is referenced by `Vacation`s;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteLodging",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_lodging(
        id: api::lodging::Id,
        ctx: &Context,
    ) -> Result<api::Lodging, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteLodging { lodging_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Room` in the specified `Lodging`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LODGING_NOT_EXISTS` - the `Lodging` with the specified ID does not
    ///   exist;
    /// - `INVALID_CAPACITY` - the `capacity` is out of `1..=100` range;
    /// - `NON_POSITIVE_PRICE` - the `price_per_night` is zero;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            capacity = %capacity,
            gql.name = "createRoom",
            lodging_id = %lodging_id,
            name = %name,
            otel.name = Self::SPAN_NAME,
            price_per_night = %price_per_night,
        ),
    )]
    pub async fn create_room(
        lodging_id: api::lodging::Id,
        name: api::room::Name,
        capacity: i32,
        price_per_night: Money,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        ctx.authorize_admin().await?;

        let capacity = api::room::capacity(capacity).map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateRoom {
                lodging_id: lodging_id.into(),
                name: name.into(),
                capacity,
                price_per_night,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Room` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does not exist;
    /// - `INVALID_CAPACITY` - the `capacity` is out of `1..=100` range;
    /// - `NON_POSITIVE_PRICE` - the `price_per_night` is zero;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            capacity = %capacity,
            gql.name = "updateRoom",
            id = %id,
            name = %name,
            otel.name = Self::SPAN_NAME,
            price_per_night = %price_per_night,
        ),
    )]
    pub async fn update_room(
        id: api::room::Id,
        name: api::room::Name,
        capacity: i32,
        price_per_night: Money,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        ctx.authorize_admin().await?;

        let capacity = api::room::capacity(capacity).map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateRoom {
                room_id: id.into(),
                name: name.into(),
                capacity,
                price_per_night,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Room` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does not exist;
    /// - `ROOM_IN_USE` - the `Room` is offered in `Package`s;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteRoom",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_room(
        id: api::room::Id,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteRoom { room_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Replaces the `Amenity`s of the `Room` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does not exist;
    /// - `AMENITY_NOT_EXISTS` - the `Amenity` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            amenity_ids = ?amenity_ids,
            gql.name = "setRoomAmenities",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn set_room_amenities(
        id: api::room::Id,
        amenity_ids: Vec<api::amenity::Id>,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::SetRoomAmenities {
                room_id: id.into(),
                amenity_ids: amenity_ids
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new draft `Vacation`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does not exist;
    /// - `LODGING_NOT_EXISTS` - the `Lodging` with the specified ID does not
    ///   exist;
    /// - `LODGING_NOT_IN_AREA` - the `Lodging` is located in another `Area`;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            area_id = %area_id,
            gql.name = "createVacation",
            is_featured = ?is_featured,
            lodging_id = %lodging_id,
            otel.name = Self::SPAN_NAME,
            title = %title,
        ),
    )]
    pub async fn create_vacation(
        area_id: api::area::Id,
        lodging_id: api::lodging::Id,
        title: api::vacation::Title,
        summary: Option<api::vacation::Summary>,
        is_featured: Option<bool>,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::CreateVacation {
                area_id: area_id.into(),
                lodging_id: lodging_id.into(),
                title: title.into(),
                summary: summary.map(Into::into),
                is_featured: is_featured.unwrap_or_default(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Vacation` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `NO_PACKAGES` - the `Vacation` cannot be published without `Package`s;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateVacation",
            id = %id,
            is_featured = %is_featured,
            otel.name = Self::SPAN_NAME,
            status = ?status,
            title = %title,
        ),
    )]
    pub async fn update_vacation(
        id: api::vacation::Id,
        title: api::vacation::Title,
        summary: Option<api::vacation::Summary>,
        is_featured: bool,
        status: api::vacation::Status,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::UpdateVacation {
                vacation_id: id.into(),
                title: title.into(),
                summary: summary.map(Into::into),
                is_featured,
                status: status.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Vacation` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `VACATION_HAS_BOOKINGS` - the `Vacation` has been booked already;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteVacation",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_vacation(
        id: api::vacation::Id,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteVacation { vacation_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Attaches the `Template` to the `Vacation`.
    /// 
    /// A `TITLE` or `DESCRIPTION` `Template` replaces the previously attached
    /// one of the same kind.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `TEMPLATE_NOT_EXISTS` - the `Template` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "attachTemplate",
            otel.name = Self::SPAN_NAME,
            template_id = %template_id,
            vacation_id = %vacation_id,
        ),
    )]
    pub async fn attach_template(
        vacation_id: api::vacation::Id,
        template_id: api::template::Id,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::AttachTemplate {
                vacation_id: vacation_id.into(),
                template_id: template_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Detaches the `Template` from the `Vacation`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `TEMPLATE_NOT_ATTACHED` - the `Template` is not attached to the
    ///   `Vacation`;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "detachTemplate",
            otel.name = Self::SPAN_NAME,
            template_id = %template_id,
            vacation_id = %vacation_id,
        ),
    )]
    pub async fn detach_template(
        vacation_id: api::vacation::Id,
        template_id: api::template::Id,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DetachTemplate {
                vacation_id: vacation_id.into(),
                template_id: template_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Package` of the `Vacation`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does not exist;
    /// - `ROOM_NOT_IN_LODGING` - the `Room` belongs to another `Lodging`;
    /// - `EXCEEDS_ROOM_CAPACITY` - `max_guests` exceed the `Room` capacity;
    /// - `INVALID_NIGHTS` - the `nights` are out of `1..=365` range;
    /// - `INVALID_CAPACITY` - `max_guests` are out of `1..=100` range;
    /// - `NON_POSITIVE_PRICE` - the `price` is zero;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createPackage",
            max_guests = %max_guests,
            name = %name,
            nights = %nights,
            otel.name = Self::SPAN_NAME,
            price = %price,
            room_id = %room_id,
            vacation_id = %vacation_id,
        ),
    )]
    pub async fn create_package(
        vacation_id: api::vacation::Id,
        room_id: api::room::Id,
        name: api::package::Name,
        nights: i32,
        price: Money,
        max_guests: i32,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        ctx.authorize_admin().await?;

        let nights = api::package::nights(nights).map_err(ctx.error())?;
        let max_guests = api::room::capacity(max_guests).map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreatePackage {
                vacation_id: vacation_id.into(),
                room_id: room_id.into(),
                name: name.into(),
                nights,
                price,
                max_guests,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Package` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does not
    ///   exist;
    /// - `ROOM_NOT_EXISTS` - the `Room` of the `Package` does not exist;
    /// - `EXCEEDS_ROOM_CAPACITY` - `max_guests` exceed the `Room` capacity;
    /// - `INVALID_NIGHTS` - the `nights` are out of `1..=365` range;
    /// - `INVALID_CAPACITY` - `max_guests` are out of `1..=100` range;
    /// - `NON_POSITIVE_PRICE` - the `price` is zero;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updatePackage",
            id = %id,
            max_guests = %max_guests,
            name = %name,
            nights = %nights,
            otel.name = Self::SPAN_NAME,
            price = %price,
        ),
    )]
    pub async fn update_package(
        id: api::package::Id,
        name: api::package::Name,
        nights: i32,
        price: Money,
        max_guests: i32,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        ctx.authorize_admin().await?;

        let nights = api::package::nights(nights).map_err(ctx.error())?;
        let max_guests = api::room::capacity(max_guests).map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdatePackage {
                package_id: id.into(),
                name: name.into(),
                nights,
                price,
                max_guests,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Package` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does not
    ///   exist;
    /// - `PACKAGE_HAS_BOOKINGS` - the `Package` has been booked already;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deletePackage",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_package(
        id: api::package::Id,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeletePackage { package_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Template`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createTemplate",
            kind = ?kind,
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn create_template(
        kind: api::template::Kind,
        name: api::template::Name,
        content: api::template::Content,
        ctx: &Context,
    ) -> Result<api::Template, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::CreateTemplate {
                kind: kind.into(),
                name: name.into(),
                content: content.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Template` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TEMPLATE_NOT_EXISTS` - the `Template` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateTemplate",
            id = %id,
            name = %name,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_template(
        id: api::template::Id,
        name: api::template::Name,
        content: api::template::Content,
        ctx: &Context,
    ) -> Result<api::Template, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::UpdateTemplate {
                template_id: id.into(),
                name: name.into(),
                content: content.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Template` with the specified ID, detaching it from all the
    /// `Vacation`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TEMPLATE_NOT_EXISTS` - the `Template` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteTemplate",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_template(
        id: api::template::Id,
        ctx: &Context,
    ) -> Result<api::Template, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteTemplate { template_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Adds a new `Media` to the end of the specified owner's ones.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `MEDIA_OWNER_NOT_EXISTS` - the specified owner does not exist;
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does not exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "addMedia",
            kind = ?kind,
            otel.name = Self::SPAN_NAME,
            owner_id = %owner_id,
            owner_kind = ?owner_kind,
            url = %url,
        ),
    )]
    pub async fn add_media(
        owner_kind: api::media::OwnerKind,
        owner_id: Uuid,
        kind: api::media::Kind,
        url: api::media::Url,
        caption: Option<api::media::Caption>,
        ctx: &Context,
    ) -> Result<api::Media, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::AddMedia {
                owner: domain::media::Owner::from_parts(
                    owner_kind.into(),
                    owner_id,
                ),
                kind: kind.into(),
                url: url.into(),
                caption: caption.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Media` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `MEDIA_NOT_EXISTS` - the `Media` with the specified ID does not exist;
    /// - `INVALID_NUMBER` - the `position` is negative;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateMedia",
            id = %id,
            otel.name = Self::SPAN_NAME,
            position = %position,
        ),
    )]
    pub async fn update_media(
        id: api::media::Id,
        caption: Option<api::media::Caption>,
        position: i32,
        ctx: &Context,
    ) -> Result<api::Media, Error> {
        ctx.authorize_admin().await?;

        let position = u16::try_from(position)
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateMedia {
                media_id: id.into(),
                caption: caption.map(Into::into),
                position,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Removes the `Media` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `MEDIA_NOT_EXISTS` - the `Media` with the specified ID does not exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "removeMedia",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn remove_media(
        id: api::media::Id,
        ctx: &Context,
    ) -> Result<api::Media, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::RemoveMedia { media_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Submits a new `Review` of the published `Vacation` for moderation.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does not
    ///   exist;
    /// - `VACATION_NOT_PUBLISHED` - the `Vacation` is not published;
    /// - `INVALID_RATING` - the `rating` is out of `1..=5` range.
    #[tracing::instrument(
        skip_all,
        fields(
            author = %author,
            gql.name = "submitReview",
            otel.name = Self::SPAN_NAME,
            rating = %rating,
            vacation_id = %vacation_id,
        ),
    )]
    pub async fn submit_review(
        vacation_id: api::vacation::Id,
        author: api::review::Author,
        rating: i32,
        comment: Option<api::review::Comment>,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        let rating = api::review::rating(rating).map_err(ctx.error())?;

        ctx.service()
            .execute(command::SubmitReview {
                vacation_id: vacation_id.into(),
                author: author.into(),
                rating,
                comment: comment.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Approves or rejects the pending `Review` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REVIEW_NOT_EXISTS` - the `Review` with the specified ID does not
    ///   exist;
    /// - `REVIEW_ALREADY_MODERATED` - the `Review` is not pending;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            approve = %approve,
            gql.name = "moderateReview",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn moderate_review(
        id: api::review::Id,
        approve: bool,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::ModerateReview {
                review_id: id.into(),
                approve,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Review` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REVIEW_NOT_EXISTS` - the `Review` with the specified ID does not
    ///   exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteReview",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_review(
        id: api::review::Id,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteReview { review_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Creates a new `Voucher`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VOUCHER_CODE_OCCUPIED` - the `code` is used by another `Voucher`;
    /// - `ZERO_DISCOUNT` - the `discount` is zero;
    /// - `INVALID_NUMBER` - `max_redemptions` is negative;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            code = %code,
            discount = %discount,
            gql.name = "createVoucher",
            max_redemptions = ?max_redemptions,
            otel.name = Self::SPAN_NAME,
            valid_until = ?valid_until,
        ),
    )]
    pub async fn create_voucher(
        code: api::voucher::Code,
        discount: Percent,
        valid_until: Option<DateTime>,
        max_redemptions: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Voucher, Error> {
        ctx.authorize_admin().await?;

        let max_redemptions = max_redemptions
            .map(u32::try_from)
            .transpose()
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateVoucher {
                code: code.into(),
                discount,
                valid_until: valid_until.map(DateTime::coerce),
                max_redemptions,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Voucher` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VOUCHER_NOT_EXISTS` - the `Voucher` with the specified ID does not
    ///   exist;
    /// - `ZERO_DISCOUNT` - the `discount` is zero;
    /// - `INVALID_NUMBER` - `max_redemptions` is negative;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            discount = %discount,
            gql.name = "updateVoucher",
            id = %id,
            max_redemptions = ?max_redemptions,
            otel.name = Self::SPAN_NAME,
            valid_until = ?valid_until,
        ),
    )]
    pub async fn update_voucher(
        id: api::voucher::Id,
        discount: Percent,
        valid_until: Option<DateTime>,
        max_redemptions: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Voucher, Error> {
        ctx.authorize_admin().await?;

        let max_redemptions = max_redemptions
            .map(u32::try_from)
            .transpose()
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::UpdateVoucher {
                voucher_id: id.into(),
                discount,
                valid_until: valid_until.map(DateTime::coerce),
                max_redemptions,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Voucher` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VOUCHER_NOT_EXISTS` - the `Voucher` with the specified ID does not
    ///   exist;
    /// - `VOUCHER_REDEEMED` - the `Voucher` has been redeemed already;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteVoucher",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_voucher(
        id: api::voucher::Id,
        ctx: &Context,
    ) -> Result<api::Voucher, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::DeleteVoucher { voucher_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Books the `Package` of a published `Vacation` for the `guest`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does not
    ///   exist;
    /// - `VACATION_NOT_PUBLISHED` - the `Vacation` is not published;
    /// - `NO_ADULTS` - at least one adult must stay;
    /// - `TOO_MANY_GUESTS` - the `Package` doesn't accommodate that many
    ///   guests;
    /// - `CHECK_IN_IN_PAST` - the `check_in` is in the past;
    /// - `INVALID_NUMBER` - the number of guests is negative.
    #[tracing::instrument(
        skip_all,
        fields(
            adults = %adults,
            check_in = ?check_in,
            children = ?children,
            gql.name = "createBooking",
            otel.name = Self::SPAN_NAME,
            package_id = %package_id,
        ),
    )]
    pub async fn create_booking(
        package_id: api::package::Id,
        guest: api::booking::GuestInput,
        adults: i32,
        children: Option<i32>,
        check_in: DateTime,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        let (adults, children) = u16::try_from(adults)
            .and_then(|a| {
                Ok((a, u16::try_from(children.unwrap_or_default())?))
            })
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(command::CreateBooking {
                package_id: package_id.into(),
                guest: guest.into(),
                adults,
                children,
                check_in: check_in.coerce(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Confirms the pending `Booking` with the specified ID and notifies its
    /// `Guest` by email.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///   exist;
    /// - `BOOKING_NOT_PENDING` - the `Booking` is not pending;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "confirmBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn confirm_booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(command::ConfirmBooking { booking_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the `Booking` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///   exist;
    /// - `BOOKING_ALREADY_CANCELLED` - the `Booking` is cancelled already;
    /// - `BOOKING_IN_ORDER` - the `Booking` is part of an `Order`, which should
    ///   be cancelled instead.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelBooking",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        ctx.service()
            .execute(command::CancelBooking { booking_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Places a new `Order` of the pending `Booking`s, optionally applying a
    /// `Voucher`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NO_BOOKINGS` - no `Booking`s are specified;
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does not
    ///   exist;
    /// - `BOOKING_NOT_PENDING` - a `Booking` is not pending;
    /// - `BOOKING_IN_ORDER` - a `Booking` is part of another `Order`;
    /// - `CURRENCY_MISMATCH` - the `Booking`s are priced in different
    ///   currencies;
    /// - `VOUCHER_NOT_EXISTS` - the `Voucher` with the specified code does not
    ///   exist;
    /// - `VOUCHER_NOT_REDEEMABLE` - the `Voucher` is expired or used up;
    /// - `SUBTOTAL_OVERFLOW` - the `Booking`s prices sum up to a too large
    ///   amount.
    #[tracing::instrument(
        skip_all,
        fields(
            booking_ids = ?booking_ids,
            email = %email,
            gql.name = "placeOrder",
            otel.name = Self::SPAN_NAME,
            voucher_code = ?voucher_code,
        ),
    )]
    pub async fn place_order(
        email: api::booking::Email,
        booking_ids: Vec<api::booking::Id>,
        voucher_code: Option<api::voucher::Code>,
        ctx: &Context,
    ) -> Result<api::Order, Error> {
        ctx.service()
            .execute(command::PlaceOrder {
                email: email.into(),
                booking_ids: booking_ids
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                voucher_code: voucher_code.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Pays the pending `Order` with the specified ID, confirming all its
    /// `Booking`s, and notifies the guest by email.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ORDER_NOT_EXISTS` - the `Order` with the specified ID does not exist;
    /// - `ORDER_NOT_PENDING` - the `Order` is not pending.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "payOrder",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn pay_order(
        id: api::order::Id,
        ctx: &Context,
    ) -> Result<api::Order, Error> {
        ctx.service()
            .execute(command::PayOrder { order_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Cancels the `Order` with the specified ID along with all its `Booking`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ORDER_NOT_EXISTS` - the `Order` with the specified ID does not exist;
    /// - `ORDER_ALREADY_CANCELLED` - the `Order` is cancelled already.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "cancelOrder",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn cancel_order(
        id: api::order::Id,
        ctx: &Context,
    ) -> Result<api::Order, Error> {
        ctx.service()
            .execute(command::CancelOrder { order_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

impl AsError for command::add_media::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "MEDIA_OWNER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Media` owner with the specified ID does not \
                             exist"]
                OwnerNotExists,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::OwnerNotExists(_) => Some(Error::OwnerNotExists.into()),
        }
    }
}

impl AsError for command::attach_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::TemplateNotExists(_) => {
                Some(api::query::TemplateError::NotExists.into())
            }
        }
    }
}

impl AsError for command::cancel_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "BOOKING_ALREADY_CANCELLED"]
                #[status = CONFLICT]
                #[message = "`Booking` is cancelled already"]
                BookingAlreadyCancelled,

                #[code = "BOOKING_IN_ORDER"]
                #[status = CONFLICT]
                #[message = "`Booking` is a part of an `Order`, which should \
                             be cancelled instead"]
                BookingInOrder,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::BookingNotExists(_) => {
                Some(api::query::BookingError::NotExists.into())
            }
            Self::BookingAlreadyCancelled(_) => {
                Some(Error::BookingAlreadyCancelled.into())
            }
            Self::BookingInOrder(..) => Some(Error::BookingInOrder.into()),
        }
    }
}

impl AsError for command::cancel_order::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ORDER_ALREADY_CANCELLED"]
                #[status = CONFLICT]
                #[message = "`Order` is cancelled already"]
                OrderAlreadyCancelled,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::OrderNotExists(_) => {
                Some(api::query::OrderError::NotExists.into())
            }
            Self::OrderAlreadyCancelled(_) => {
                Some(Error::OrderAlreadyCancelled.into())
            }
        }
    }
}

impl AsError for command::confirm_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "BOOKING_NOT_PENDING"]
                #[status = CONFLICT]
                #[message = "`Booking` is not pending"]
                BookingNotPending,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Mail(e) => e.try_as_error(),
            Self::BookingNotExists(_) => {
                Some(api::query::BookingError::NotExists.into())
            }
            Self::BookingNotPending(_) => Some(Error::BookingNotPending.into()),
        }
    }
}

impl AsError for command::create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VACATION_NOT_PUBLISHED"]
                #[status = CONFLICT]
                #[message = "`Vacation` is not published"]
                VacationNotPublished,

                #[code = "NO_ADULTS"]
                #[status = BAD_REQUEST]
                #[message = "At least one adult guest is required"]
                NoAdults,

                #[code = "TOO_MANY_GUESTS"]
                #[status = BAD_REQUEST]
                #[message = "`Package` doesn't accommodate that many guests"]
                TooManyGuests,

                #[code = "CHECK_IN_IN_PAST"]
                #[status = BAD_REQUEST]
                #[message = "`check_in` must not be in the past"]
                CheckInInPast,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PackageNotExists(_) => {
                Some(api::query::PackageError::NotExists.into())
            }
            Self::VacationNotPublished(_) => {
                Some(Error::VacationNotPublished.into())
            }
            Self::NoAdults => Some(Error::NoAdults.into()),
            Self::TooManyGuests(_) => Some(Error::TooManyGuests.into()),
            Self::CheckInInPast => Some(Error::CheckInInPast.into()),
        }
    }
}

impl AsError for command::create_lodging::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AreaNotExists(_) => {
                Some(api::query::AreaError::NotExists.into())
            }
        }
    }
}

impl AsError for command::create_package::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ROOM_NOT_IN_LODGING"]
                #[status = BAD_REQUEST]
                #[message = "`Room` doesn't belong to the `Vacation` `Lodging`"]
                RoomNotInLodging,

                #[code = "EXCEEDS_ROOM_CAPACITY"]
                #[status = BAD_REQUEST]
                #[message = "`max_guests` exceed the `Room` capacity"]
                ExceedsRoomCapacity,

                #[code = "NON_POSITIVE_PRICE"]
                #[status = BAD_REQUEST]
                #[message = "Price must be greater than zero"]
                NonPositivePrice,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::RoomNotExists(_) => {
                Some(api::query::RoomError::NotExists.into())
            }
            Self::RoomNotInLodging(_) => Some(Error::RoomNotInLodging.into()),
            Self::ExceedsRoomCapacity(_) => {
                Some(Error::ExceedsRoomCapacity.into())
            }
            Self::NonPositivePrice(_) => Some(Error::NonPositivePrice.into()),
        }
    }
}

impl AsError for command::create_room::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NON_POSITIVE_PRICE"]
                #[status = BAD_REQUEST]
                #[message = "Price must be greater than zero"]
                NonPositivePrice,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::LodgingNotExists(_) => {
                Some(api::query::LodgingError::NotExists.into())
            }
            Self::NonPositivePrice(_) => Some(Error::NonPositivePrice.into()),
        }
    }
}

impl AsError for command::create_vacation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LODGING_NOT_IN_AREA"]
                #[status = BAD_REQUEST]
                #[message = "`Lodging` is located in another `Area`"]
                LodgingNotInArea,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AreaNotExists(_) => {
                Some(api::query::AreaError::NotExists.into())
            }
            Self::LodgingNotExists(_) => {
                Some(api::query::LodgingError::NotExists.into())
            }
            Self::LodgingNotInArea(_) => Some(Error::LodgingNotInArea.into()),
        }
    }
}

impl AsError for command::create_voucher::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VOUCHER_CODE_OCCUPIED"]
                #[status = CONFLICT]
                #[message = "`VoucherCode` is occupied by another `Voucher`"]
                CodeOccupied,

                #[code = "ZERO_DISCOUNT"]
                #[status = BAD_REQUEST]
                #[message = "`Voucher` discount must be greater than zero"]
                ZeroDiscount,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::CodeOccupied(_) => Some(Error::CodeOccupied.into()),
            Self::ZeroDiscount => Some(Error::ZeroDiscount.into()),
        }
    }
}

impl AsError for command::delete_amenity::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AmenityNotExists(_) => {
                Some(api::query::AmenityError::NotExists.into())
            }
        }
    }
}

impl AsError for command::delete_area::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "AREA_IN_USE"]
                #[status = CONFLICT]
                #[message = "`Area` is referenced by `Lodging`s or `Vacation`s"]
                AreaInUse,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AreaNotExists(_) => {
                Some(api::query::AreaError::NotExists.into())
            }
            Self::AreaInUse(_) => Some(Error::AreaInUse.into()),
        }
    }
}

impl AsError for command::delete_lodging::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "LODGING_IN_USE"]
                #[status = CONFLICT]
                #[message = "`Lodging` is referenced by `Vacation`s"]
                LodgingInUse,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::LodgingNotExists(_) => {
                Some(api::query::LodgingError::NotExists.into())
            }
            Self::LodgingInUse(_) => Some(Error::LodgingInUse.into()),
        }
    }
}

impl AsError for command::delete_package::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "PACKAGE_HAS_BOOKINGS"]
                #[status = CONFLICT]
                #[message = "`Package` has been booked already"]
                PackageHasBookings,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PackageNotExists(_) => {
                Some(api::query::PackageError::NotExists.into())
            }
            Self::PackageHasBookings(_) => {
                Some(Error::PackageHasBookings.into())
            }
        }
    }
}

impl AsError for command::delete_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ReviewNotExists(_) => {
                Some(api::query::ReviewError::NotExists.into())
            }
        }
    }
}

impl AsError for command::delete_room::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ROOM_IN_USE"]
                #[status = CONFLICT]
                #[message = "`Room` is offered in `Package`s"]
                RoomInUse,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::RoomNotExists(_) => {
                Some(api::query::RoomError::NotExists.into())
            }
            Self::RoomInUse(_) => Some(Error::RoomInUse.into()),
        }
    }
}

impl AsError for command::delete_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::TemplateNotExists(_) => {
                Some(api::query::TemplateError::NotExists.into())
            }
        }
    }
}

impl AsError for command::delete_vacation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VACATION_HAS_BOOKINGS"]
                #[status = CONFLICT]
                #[message = "`Vacation` has been booked already"]
                VacationHasBookings,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::VacationHasBookings(_) => {
                Some(Error::VacationHasBookings.into())
            }
        }
    }
}

impl AsError for command::delete_voucher::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VOUCHER_REDEEMED"]
                #[status = CONFLICT]
                #[message = "`Voucher` has been redeemed already"]
                VoucherRedeemed,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VoucherNotExists(_) => {
                Some(api::query::VoucherError::NotExists.into())
            }
            Self::VoucherRedeemed(_) => Some(Error::VoucherRedeemed.into()),
        }
    }
}

impl AsError for command::detach_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "TEMPLATE_NOT_ATTACHED"]
                #[status = CONFLICT]
                #[message = "`Template` is not attached to the `Vacation`"]
                TemplateNotAttached,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::TemplateNotAttached(_) => {
                Some(Error::TemplateNotAttached.into())
            }
        }
    }
}

impl AsError for command::moderate_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "REVIEW_ALREADY_MODERATED"]
                #[status = CONFLICT]
                #[message = "`Review` is moderated already"]
                ReviewAlreadyModerated,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ReviewNotExists(_) => {
                Some(api::query::ReviewError::NotExists.into())
            }
            Self::ReviewAlreadyModerated(_) => {
                Some(Error::ReviewAlreadyModerated.into())
            }
        }
    }
}

impl AsError for command::pay_order::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ORDER_NOT_PENDING"]
                #[status = CONFLICT]
                #[message = "`Order` is not pending"]
                OrderNotPending,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Mail(e) => e.try_as_error(),
            Self::OrderNotExists(_) => {
                Some(api::query::OrderError::NotExists.into())
            }
            Self::OrderNotPending(_) => Some(Error::OrderNotPending.into()),
        }
    }
}

impl AsError for command::place_order::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NO_BOOKINGS"]
                #[status = BAD_REQUEST]
                #[message = "At least one `Booking` is required"]
                NoBookings,

                #[code = "BOOKING_NOT_PENDING"]
                #[status = CONFLICT]
                #[message = "`Booking` is not pending"]
                BookingNotPending,

                #[code = "BOOKING_IN_ORDER"]
                #[status = CONFLICT]
                #[message = "`Booking` is a part of another `Order`"]
                BookingInOrder,

                #[code = "CURRENCY_MISMATCH"]
                #[status = BAD_REQUEST]
                #[message = "`Booking`s are priced in different currencies"]
                CurrencyMismatch,

                #[code = "VOUCHER_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "`Voucher` with the specified code does not exist"]
                VoucherNotExists,

                #[code = "VOUCHER_NOT_REDEEMABLE"]
                #[status = CONFLICT]
                #[message = "`Voucher` is expired or used up"]
                VoucherNotRedeemable,

                #[code = "SUBTOTAL_OVERFLOW"]
                #[status = BAD_REQUEST]
                #[message = "`Order` subtotal is too large"]
                SubtotalOverflow,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::NoBookings => Some(Error::NoBookings.into()),
            Self::BookingNotExists(_) => {
                Some(api::query::BookingError::NotExists.into())
            }
            Self::BookingNotPending(_) => Some(Error::BookingNotPending.into()),
            Self::BookingInOrder(_) => Some(Error::BookingInOrder.into()),
            Self::CurrencyMismatch(_) => Some(Error::CurrencyMismatch.into()),
            Self::VoucherNotExists(_) => Some(Error::VoucherNotExists.into()),
            Self::VoucherNotRedeemable(_) => {
                Some(Error::VoucherNotRedeemable.into())
            }
            Self::SubtotalOverflow => Some(Error::SubtotalOverflow.into()),
        }
    }
}

impl AsError for command::remove_media::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::MediaNotExists(_) => {
                Some(api::query::MediaError::NotExists.into())
            }
        }
    }
}

impl AsError for command::set_room_amenities::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::RoomNotExists(_) => {
                Some(api::query::RoomError::NotExists.into())
            }
            Self::AmenityNotExists(_) => {
                Some(api::query::AmenityError::NotExists.into())
            }
        }
    }
}

impl AsError for command::submit_review::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "VACATION_NOT_PUBLISHED"]
                #[status = CONFLICT]
                #[message = "`Vacation` is not published"]
                VacationNotPublished,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::VacationNotPublished(_) => {
                Some(Error::VacationNotPublished.into())
            }
        }
    }
}

impl AsError for command::update_amenity::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AmenityNotExists(_) => {
                Some(api::query::AmenityError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_area::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::AreaNotExists(_) => {
                Some(api::query::AreaError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_lodging::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::LodgingNotExists(_) => {
                Some(api::query::LodgingError::NotExists.into())
            }
            Self::AreaNotExists(_) => {
                Some(api::query::AreaError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_media::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::MediaNotExists(_) => {
                Some(api::query::MediaError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_package::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "EXCEEDS_ROOM_CAPACITY"]
                #[status = BAD_REQUEST]
                #[message = "`max_guests` exceed the `Room` capacity"]
                ExceedsRoomCapacity,

                #[code = "NON_POSITIVE_PRICE"]
                #[status = BAD_REQUEST]
                #[message = "Price must be greater than zero"]
                NonPositivePrice,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PackageNotExists(_) => {
                Some(api::query::PackageError::NotExists.into())
            }
            Self::RoomNotExists(_) => {
                Some(api::query::RoomError::NotExists.into())
            }
            Self::ExceedsRoomCapacity(_) => {
                Some(Error::ExceedsRoomCapacity.into())
            }
            Self::NonPositivePrice(_) => Some(Error::NonPositivePrice.into()),
        }
    }
}

impl AsError for command::update_room::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NON_POSITIVE_PRICE"]
                #[status = BAD_REQUEST]
                #[message = "Price must be greater than zero"]
                NonPositivePrice,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::RoomNotExists(_) => {
                Some(api::query::RoomError::NotExists.into())
            }
            Self::NonPositivePrice(_) => Some(Error::NonPositivePrice.into()),
        }
    }
}

impl AsError for command::update_template::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::TemplateNotExists(_) => {
                Some(api::query::TemplateError::NotExists.into())
            }
        }
    }
}

impl AsError for command::update_vacation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "NO_PACKAGES"]
                #[status = CONFLICT]
                #[message = "`Vacation` cannot be published without `Package`s"]
                NoPackages,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VacationNotExists(_) => {
                Some(api::query::VacationError::NotExists.into())
            }
            Self::NoPackages(_) => Some(Error::NoPackages.into()),
        }
    }
}

impl AsError for command::update_voucher::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ZERO_DISCOUNT"]
                #[status = BAD_REQUEST]
                #[message = "`Voucher` discount must be greater than zero"]
                ZeroDiscount,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::VoucherNotExists(_) => {
                Some(api::query::VoucherError::NotExists.into())
            }
            Self::ZeroDiscount => Some(Error::ZeroDiscount.into()),
        }
    }
}
