//! Admin authentication: session context and server functions

mod context;
mod server_fns;

pub use context::*;
pub use server_fns::*;

use serde::{Deserialize, Serialize};

/// The signed-in back-office user, as stored in the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: uuid::Uuid,
    pub username: String,
}
