pub mod borrow;
pub mod core;
pub mod duedate;
pub mod gateway;
pub mod utils;
