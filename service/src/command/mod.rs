//! [`Command`] definition.

pub mod add_media;
pub mod attach_template;
pub mod cancel_booking;
pub mod cancel_order;
pub mod confirm_booking;
pub mod create_amenity;
pub mod create_area;
pub mod create_booking;
pub mod create_lodging;
pub mod create_package;
pub mod create_room;
pub mod create_template;
pub mod create_vacation;
pub mod create_voucher;
pub mod delete_amenity;
pub mod delete_area;
pub mod delete_lodging;
pub mod delete_package;
pub mod delete_review;
pub mod delete_room;
pub mod delete_template;
pub mod delete_vacation;
pub mod delete_voucher;
pub mod detach_template;
pub mod moderate_review;
pub mod pay_order;
pub mod place_order;
pub mod remove_media;
pub mod set_room_amenities;
pub mod submit_review;
pub mod update_amenity;
pub mod update_area;
pub mod update_lodging;
pub mod update_media;
pub mod update_package;
pub mod update_room;
pub mod update_template;
pub mod update_vacation;
pub mod update_voucher;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_media::AddMedia, attach_template::AttachTemplate,
    cancel_booking::CancelBooking, cancel_order::CancelOrder,
    confirm_booking::ConfirmBooking, create_amenity::CreateAmenity,
    create_area::CreateArea, create_booking::CreateBooking,
    create_lodging::CreateLodging, create_package::CreatePackage,
    create_room::CreateRoom, create_template::CreateTemplate,
    create_vacation::CreateVacation, create_voucher::CreateVoucher,
    delete_amenity::DeleteAmenity, delete_area::DeleteArea,
    delete_lodging::DeleteLodging, delete_package::DeletePackage,
    delete_review::DeleteReview, delete_room::DeleteRoom,
    delete_template::DeleteTemplate, delete_vacation::DeleteVacation,
    delete_voucher::DeleteVoucher, detach_template::DetachTemplate,
    moderate_review::ModerateReview, pay_order::PayOrder,
    place_order::PlaceOrder, remove_media::RemoveMedia,
    set_room_amenities::SetRoomAmenities, submit_review::SubmitReview,
    update_amenity::UpdateAmenity, update_area::UpdateArea,
    update_lodging::UpdateLodging, update_media::UpdateMedia,
    update_package::UpdatePackage, update_room::UpdateRoom,
    update_template::UpdateTemplate, update_vacation::UpdateVacation,
    update_voucher::UpdateVoucher,
};
