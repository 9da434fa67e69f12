pub mod errors;
pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod state;
pub mod templates;

pub use handlers::configure;
pub use middleware::SessionLoader;
pub use state::AppState;
