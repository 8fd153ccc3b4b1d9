//! Read entities definitions.

pub mod area;
pub mod booking;
pub mod lodging;
pub mod order;
pub mod package;
pub mod review;
pub mod room;
pub mod template;
pub mod vacation;
