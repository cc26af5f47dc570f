pub mod attendance;
pub mod details;
pub mod list;

pub use attendance::AttendancePage;
pub use details::StaffDetailsPage;
pub use list::StaffListPage;
