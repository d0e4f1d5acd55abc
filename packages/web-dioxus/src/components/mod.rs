//! Reusable UI components

mod confirmation_dialog;
mod header;
mod layout;
mod loading;
mod notification;
mod opinion_card;

pub use confirmation_dialog::*;
pub use header::*;
pub use layout::*;
pub use loading::*;
pub use notification::*;
pub use opinion_card::*;
