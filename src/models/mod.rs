pub use community::*;
pub use post::*;
pub use session::*;
pub use user::*;

mod community;
mod post;
mod session;
mod user;
