mod appointment_repository;
mod service_repository;

pub use appointment_repository::AppointmentRepository;
pub use service_repository::ServiceRepository;
