pub mod accounts;
pub mod handlers;
pub mod middleware;
pub mod reports;
pub mod routes;
pub mod state;
pub mod store;

// Re-export key types
pub use routes::build_router;
pub use state::AppState;
