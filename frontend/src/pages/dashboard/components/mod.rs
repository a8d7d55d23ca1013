pub mod revenue_chart;
pub mod staff_table;
pub mod summary;
