//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod breadcrumbs;
mod loading;
mod nav;
mod redirect;
mod resource_card;

pub use admin_layout::*;
pub use admin_nav::*;
pub use breadcrumbs::*;
pub use loading::*;
pub use nav::*;
pub use redirect::*;
pub use resource_card::*;
