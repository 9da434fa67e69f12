pub use auth::*;
pub use session::*;
pub use store::*;

mod auth;
mod session;
mod store;
