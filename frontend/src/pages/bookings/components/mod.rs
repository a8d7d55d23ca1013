pub mod add_booking;
pub mod booking_fields;
pub mod booking_list;
pub mod edit_modal;
pub mod explore_modal;
pub mod online_list;
pub mod service_lines;
