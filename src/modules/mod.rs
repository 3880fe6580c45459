pub mod booking;
pub mod catalog;
