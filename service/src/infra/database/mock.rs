//! In-memory [`Database`] used in tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use common::operations::{
    By, Commit, Delete, Insert, Lock, Select, Transact, Update,
};
use tracerr::Traced;

use crate::{
    domain::{
        amenity, area, booking, lodging, media, order, package, review, room,
        template, vacation, voucher, Amenity, Area, Booking, Lodging, Media,
        Order, Package, Review, Room, Template, Vacation, Voucher,
    },
    infra::{database, mail, Database},
    read, Config, Service,
};

/// In-memory [`Database`].
///
/// [`Transact`] snapshots the whole state, so nothing is visible outside the
/// transaction until [`Commit`] is executed.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mock {
    /// [`State`] this [`Mock`] operates on.
    state: Arc<Mutex<State>>,

    /// [`State`] to apply the changes to on [`Commit`], if transacted.
    root: Option<Arc<Mutex<State>>>,
}

/// Stored data of a [`Mock`].
#[derive(Clone, Debug, Default)]
pub(crate) struct State {
    pub(crate) amenities: HashMap<amenity::Id, Amenity>,
    pub(crate) areas: HashMap<area::Id, Area>,
    pub(crate) lodgings: HashMap<lodging::Id, Lodging>,
    pub(crate) rooms: HashMap<room::Id, Room>,
    pub(crate) vacations: HashMap<vacation::Id, Vacation>,
    pub(crate) packages: HashMap<package::Id, Package>,
    pub(crate) templates: HashMap<template::Id, Template>,
    pub(crate) media: HashMap<media::Id, Media>,
    pub(crate) reviews: HashMap<review::Id, Review>,
    pub(crate) template_links: HashSet<vacation::TemplateLink>,
    pub(crate) vouchers: HashMap<voucher::Id, Voucher>,
    pub(crate) bookings: HashMap<booking::Id, Booking>,
    pub(crate) orders: HashMap<order::Id, Order>,

    /// Number of executed [`Commit`]s.
    pub(crate) commits: usize,

    /// Indicator whether every operation fails.
    pub(crate) failing: bool,
}

impl Mock {
    /// Creates a new [`Mock`] prefilled with the provided [`State`].
    pub(crate) fn with(state: State) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            root: None,
        }
    }

    /// Provides access to the [`State`] of this [`Mock`].
    pub(crate) fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the [`State`], failing if configured so.
    fn checked(
        &self,
    ) -> Result<MutexGuard<'_, State>, Traced<database::Error>> {
        let state = self.state();
        if state.failing {
            return Err(tracerr::new!(database::Error::Mock));
        }
        Ok(state)
    }
}

/// Creates a new [`Service`] backed by the provided [`Mock`] and
/// [`mail::mock::Recorder`].
pub(crate) fn service(
    db: &Mock,
    mailer: &mail::mock::Recorder,
) -> Service<Mock, mail::mock::Recorder> {
    Service {
        config: Config::default(),
        database: db.clone(),
        mailer: mailer.clone(),
    }
}

impl Database<Transact> for Mock {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        let snapshot = self.checked()?.clone();
        Ok(Self {
            state: Arc::new(Mutex::new(snapshot)),
            root: Some(Arc::clone(&self.state)),
        })
    }
}

impl Database<Commit> for Mock {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        let mut state = self.checked()?;
        state.commits += 1;
        if let Some(root) = &self.root {
            *root.lock().unwrap_or_else(PoisonError::into_inner) =
                state.clone();
        }
        Ok(())
    }
}

/// Implements by-ID [`Select`], [`Insert`], [`Update`] and [`Lock`]
/// operations for the provided entities.
macro_rules! impl_entity {
    ($($ty:ident in $field:ident by $id:ty),* $(,)?) => {$(
        impl Database<Select<By<Option<$ty>, $id>>> for Mock {
            type Ok = Option<$ty>;
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                Select(by): Select<By<Option<$ty>, $id>>,
            ) -> Result<Self::Ok, Self::Err> {
                Ok(self.checked()?.$field.get(by.inner()).cloned())
            }
        }

        impl Database<Insert<$ty>> for Mock {
            type Ok = ();
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                Insert(v): Insert<$ty>,
            ) -> Result<Self::Ok, Self::Err> {
                let _ = self.checked()?.$field.insert(v.id, v);
                Ok(())
            }
        }

        impl Database<Update<$ty>> for Mock {
            type Ok = ();
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                Update(v): Update<$ty>,
            ) -> Result<Self::Ok, Self::Err> {
                let _ = self.checked()?.$field.insert(v.id, v);
                Ok(())
            }
        }

        impl Database<Lock<By<$ty, $id>>> for Mock {
            type Ok = ();
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                _: Lock<By<$ty, $id>>,
            ) -> Result<Self::Ok, Self::Err> {
                self.checked().map(drop)
            }
        }
    )*};
}

impl_entity! {
    Amenity in amenities by amenity::Id,
    Area in areas by area::Id,
    Lodging in lodgings by lodging::Id,
    Room in rooms by room::Id,
    Vacation in vacations by vacation::Id,
    Package in packages by package::Id,
    Template in templates by template::Id,
    Media in media by media::Id,
    Review in reviews by review::Id,
    Voucher in vouchers by voucher::Id,
    Booking in bookings by booking::Id,
    Order in orders by order::Id,
}

/// Implements by-ID [`Delete`] operations for the provided entities.
macro_rules! impl_delete {
    ($($ty:ident in $field:ident by $id:ty),* $(,)?) => {$(
        impl Database<Delete<By<$ty, $id>>> for Mock {
            type Ok = ();
            type Err = Traced<database::Error>;

            async fn execute(
                &self,
                Delete(by): Delete<By<$ty, $id>>,
            ) -> Result<Self::Ok, Self::Err> {
                let _ = self.checked()?.$field.remove(by.inner());
                Ok(())
            }
        }
    )*};
}

impl_delete! {
    Area in areas by area::Id,
    Vacation in vacations by vacation::Id,
    Media in media by media::Id,
    Voucher in vouchers by voucher::Id,
}

impl Database<Select<By<read::area::InUse, area::Id>>> for Mock {
    type Ok = read::area::InUse;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::area::InUse, area::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = *by.inner();
        let state = self.checked()?;
        Ok(read::area::InUse(
            state.lodgings.values().any(|l| l.area_id == id)
                || state.vacations.values().any(|v| v.area_id == id),
        ))
    }
}

impl Database<Select<By<Vec<Package>, vacation::Id>>> for Mock {
    type Ok = Vec<Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Package>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = *by.inner();
        let mut packages = self
            .checked()?
            .packages
            .values()
            .filter(|p| p.vacation_id == id)
            .cloned()
            .collect::<Vec<_>>();
        packages.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
        Ok(packages)
    }
}

impl Database<Select<By<Vec<Package>, Vec<vacation::Id>>>> for Mock {
    type Ok = Vec<Package>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Package>, Vec<vacation::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let ids = by.inner();
        Ok(self
            .checked()?
            .packages
            .values()
            .filter(|p| ids.contains(&p.vacation_id))
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<Vacation>, vacation::Status>>> for Mock {
    type Ok = Vec<Vacation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Vacation>, vacation::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        let status = *by.inner();
        Ok(self
            .checked()?
            .vacations
            .values()
            .filter(|v| v.status == status)
            .cloned()
            .collect())
    }
}

impl Database<Select<By<read::vacation::HasBookings, vacation::Id>>>
    for Mock
{
    type Ok = read::vacation::HasBookings;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::vacation::HasBookings, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = *by.inner();
        Ok(read::vacation::HasBookings(
            self.checked()?.bookings.values().any(|b| b.vacation_id == id),
        ))
    }
}

impl Database<Select<By<Vec<Room>, lodging::Id>>> for Mock {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, lodging::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = *by.inner();
        Ok(self
            .checked()?
            .rooms
            .values()
            .filter(|r| r.lodging_id == id)
            .cloned()
            .collect())
    }
}

impl Database<Select<By<HashMap<amenity::Id, Amenity>, Vec<amenity::Id>>>>
    for Mock
{
    type Ok = HashMap<amenity::Id, Amenity>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<amenity::Id, Amenity>, Vec<amenity::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.checked()?;
        Ok(by
            .inner()
            .iter()
            .filter_map(|id| state.amenities.get(id))
            .map(|a| (a.id, a.clone()))
            .collect())
    }
}

impl Database<Select<By<Vec<Media>, media::Owner>>> for Mock {
    type Ok = Vec<Media>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Media>, media::Owner>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner = *by.inner();
        let mut media = self
            .checked()?
            .media
            .values()
            .filter(|m| m.owner == owner)
            .cloned()
            .collect::<Vec<_>>();
        media.sort_by_key(|m| (m.position, m.created_at));
        Ok(media)
    }
}

impl Database<Select<By<Vec<Template>, vacation::Id>>> for Mock {
    type Ok = Vec<Template>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Template>, vacation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = *by.inner();
        let state = self.checked()?;
        Ok(state
            .template_links
            .iter()
            .filter(|l| l.vacation_id == id)
            .filter_map(|l| state.templates.get(&l.template_id))
            .cloned()
            .collect())
    }
}

impl Database<Insert<vacation::TemplateLink>> for Mock {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(link): Insert<vacation::TemplateLink>,
    ) -> Result<Self::Ok, Self::Err> {
        let _ = self.checked()?.template_links.insert(link);
        Ok(())
    }
}

impl Database<Delete<vacation::TemplateLink>> for Mock {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(link): Delete<vacation::TemplateLink>,
    ) -> Result<Self::Ok, Self::Err> {
        let _ = self.checked()?.template_links.remove(&link);
        Ok(())
    }
}

impl Database<Select<By<Option<Voucher>, voucher::Code>>> for Mock {
    type Ok = Option<Voucher>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Voucher>, voucher::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .checked()?
            .vouchers
            .values()
            .find(|v| &v.code == by.inner())
            .cloned())
    }
}

impl Database<Lock<By<Voucher, voucher::Code>>> for Mock {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Voucher, voucher::Code>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.checked().map(drop)
    }
}

impl Database<Select<By<HashMap<booking::Id, Booking>, Vec<booking::Id>>>>
    for Mock
{
    type Ok = HashMap<booking::Id, Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<HashMap<booking::Id, Booking>, Vec<booking::Id>>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.checked()?;
        Ok(by
            .inner()
            .iter()
            .filter_map(|id| state.bookings.get(id))
            .map(|b| (b.id, b.clone()))
            .collect())
    }
}

impl Database<Select<By<Vec<Booking>, booking::CreationDateTime>>> for Mock {
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, booking::CreationDateTime>>,
    ) -> Result<Self::Ok, Self::Err> {
        let deadline = *by.inner();
        Ok(self
            .checked()?
            .bookings
            .values()
            .filter(|b| {
                b.status == booking::Status::Pending
                    && b.order_id.is_none()
                    && b.created_at < deadline
            })
            .cloned()
            .collect())
    }
}

/// Sample entities to prefill a [`Mock`] with.
pub(crate) mod fixture {
    use common::{Currency, DateTime, Money, Percent};
    use rust_decimal::Decimal;

    use crate::domain::{
        amenity, area, booking, guest, lodging, media, package, review, room,
        template, vacation, voucher, Amenity, Area, Booking, Guest, Lodging,
        Media, Package, Review, Room, Template, Vacation, Voucher,
    };

    /// Creates a [`Money`] amount in US dollars.
    pub(crate) fn usd(amount: i64) -> Money {
        Money {
            amount: Decimal::from(amount),
            currency: Currency::Usd,
        }
    }

    /// Creates a [`Guest`] without a phone.
    pub(crate) fn guest() -> Guest {
        Guest {
            name: guest::Name::new("Jane Doe").expect("valid name"),
            email: guest::Email::new("jane@example.com").expect("valid email"),
            phone: None,
        }
    }

    /// Creates an [`Amenity`] with the provided `name`.
    pub(crate) fn amenity(name: &str) -> Amenity {
        Amenity {
            id: amenity::Id::new(),
            name: amenity::Name::new(name).expect("valid name"),
            description: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates an [`Area`].
    pub(crate) fn area() -> Area {
        Area {
            id: area::Id::new(),
            name: area::Name::new("Algarve").expect("valid name"),
            country: area::Country::new("Portugal").expect("valid country"),
            description: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a hotel [`Lodging`] in the provided [`Area`].
    pub(crate) fn lodging(area: &Area) -> Lodging {
        Lodging {
            id: lodging::Id::new(),
            area_id: area.id,
            name: lodging::Name::new("Sea View").expect("valid name"),
            kind: lodging::Kind::Hotel,
            address: lodging::Address::new("1 Beach Road")
                .expect("valid address"),
            description: None,
            stars: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a [`Room`] of the provided [`Lodging`].
    pub(crate) fn room(
        lodging: &Lodging,
        price_per_night: Money,
        capacity: u16,
    ) -> Room {
        Room {
            id: room::Id::new(),
            lodging_id: lodging.id,
            name: room::Name::new("Double").expect("valid name"),
            capacity: room::Capacity::new(capacity).expect("valid capacity"),
            price_per_night,
            amenities: vec![],
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates an image [`Media`] of the provided [`media::Owner`].
    pub(crate) fn media(owner: media::Owner, position: u16) -> Media {
        Media {
            id: media::Id::new(),
            owner,
            kind: media::Kind::Image,
            url: media::Url::new("https://example.com/a.jpg")
                .expect("valid url"),
            caption: None,
            position,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a pending [`Review`] of the provided [`Vacation`].
    pub(crate) fn review(vacation: &Vacation) -> Review {
        Review {
            id: review::Id::new(),
            vacation_id: vacation.id,
            author: review::Author::new("Jane").expect("valid author"),
            rating: review::Rating::new(5).expect("valid rating"),
            comment: None,
            status: review::Status::Pending,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a [`Vacation`] of the provided [`vacation::Status`].
    pub(crate) fn vacation(status: vacation::Status) -> Vacation {
        Vacation {
            id: vacation::Id::new(),
            area_id: area::Id::new(),
            lodging_id: lodging::Id::new(),
            title: vacation::Title::new("Sunny Coast").expect("valid title"),
            summary: None,
            status,
            is_featured: false,
            created_at: DateTime::now().coerce(),
            updated_at: DateTime::now().coerce(),
        }
    }

    /// Creates a [`Package`] of the provided [`Vacation`].
    pub(crate) fn package(
        vacation: &Vacation,
        price: Money,
        max_guests: u16,
    ) -> Package {
        Package {
            id: package::Id::new(),
            vacation_id: vacation.id,
            room_id: room::Id::new(),
            name: package::Name::new("Week").expect("valid name"),
            nights: package::Nights::new(7).expect("valid nights"),
            price,
            max_guests: room::Capacity::new(max_guests)
                .expect("valid capacity"),
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a pending [`Booking`] of the provided [`Package`].
    pub(crate) fn booking(package: &Package) -> Booking {
        Booking {
            id: booking::Id::new(),
            vacation_id: package.vacation_id,
            package_id: package.id,
            guest: guest(),
            adults: 2,
            children: 0,
            check_in: DateTime::now().add_days(10).coerce(),
            nights: package.nights,
            price: package.price,
            status: booking::Status::Pending,
            order_id: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a [`Voucher`] with the provided `code` and `discount`.
    pub(crate) fn voucher(code: &str, discount: i64) -> Voucher {
        Voucher {
            id: voucher::Id::new(),
            code: voucher::Code::new(code).expect("valid code"),
            discount: Percent::new(Decimal::from(discount))
                .expect("valid percent"),
            valid_until: None,
            max_redemptions: None,
            redemptions: 0,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Creates a [`Template`] of the provided [`template::Kind`].
    pub(crate) fn template(kind: template::Kind) -> Template {
        Template {
            id: template::Id::new(),
            kind,
            name: template::Name::new("Template").expect("valid name"),
            content: template::Content::new("Content").expect("valid content"),
            created_at: DateTime::now().coerce(),
        }
    }
}
