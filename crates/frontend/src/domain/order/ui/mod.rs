pub mod details;
pub mod list;

pub use details::OrderDetailsPage;
pub use list::OrdersListPage;
