pub mod money;
pub mod storage;
pub mod task;
pub mod time;
