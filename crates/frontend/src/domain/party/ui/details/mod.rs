//! Party details form

mod view;
mod view_model;

pub use view::PartyDetailsPage;
pub use view_model::PartyDetailsViewModel;
