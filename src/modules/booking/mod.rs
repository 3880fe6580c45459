pub mod handlers;
pub mod locks;
pub mod routes;
pub mod workflow;
