pub mod appointment_form;
pub mod hero;
pub mod services;
