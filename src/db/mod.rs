pub use communities::*;
pub use db::*;
pub use posts::*;
pub use sessions::*;
pub use users::*;

mod communities;
mod db;
mod posts;
mod sessions;
mod users;
