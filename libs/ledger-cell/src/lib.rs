pub mod events;
pub mod gateway;
pub mod models;
pub mod session;

pub use events::*;
pub use gateway::*;
pub use models::*;
pub use session::*;
