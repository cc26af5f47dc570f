//! Staff details form

mod view;
mod view_model;

pub use view::StaffDetailsPage;
pub use view_model::StaffDetailsViewModel;
