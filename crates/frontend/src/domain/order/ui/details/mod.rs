//! Order details form
//!
//! MVVM split in the usual shape:
//! - view_model.rs: form state, option loading, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrderDetailsPage;
pub use view_model::OrderDetailsViewModel;
