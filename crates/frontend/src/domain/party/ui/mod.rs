pub mod details;
pub mod list;

pub use details::PartyDetailsPage;
pub use list::PartiesListPage;
