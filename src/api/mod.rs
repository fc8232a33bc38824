//! API routes module.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::cors_layer;
pub use routes::create_router;
