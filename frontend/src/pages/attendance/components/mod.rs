pub mod calendar;
pub mod mark_form;
