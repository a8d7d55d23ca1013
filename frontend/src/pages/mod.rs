pub mod attendance;
pub mod bookings;
pub mod dashboard;
pub mod employees;
pub mod home;
pub mod login;
