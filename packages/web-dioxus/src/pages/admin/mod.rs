//! Administrator pages

mod user_details;
mod users;

pub use user_details::*;
pub use users::*;
