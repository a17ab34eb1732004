//! API endpoint implementations

pub mod public;
pub mod account;
pub mod orders;
pub mod margin;
pub mod lending;

pub use public::PublicClient;
pub use account::AccountEndpoints;
pub use orders::OrderEndpoints;
pub use margin::MarginEndpoints;
pub use lending::LendingEndpoints;
