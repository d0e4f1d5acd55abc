//! Application pages

pub mod admin;
mod article;
mod comments;
mod errors;
mod home;
mod login;
mod opinions;
mod set_password;

pub use article::*;
pub use errors::*;
pub use home::*;
pub use login::*;
pub use set_password::*;
