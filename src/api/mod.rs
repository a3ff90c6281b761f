/*
 * Responsibility
 * - Route table re-export (routes())
 */
pub mod handlers;
mod routes;

pub use routes::routes;
