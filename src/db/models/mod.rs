mod appointment;
mod salon_service;

#[allow(unused)]
pub use appointment::*;
#[allow(unused)]
pub use salon_service::*;
