pub mod client;
pub mod row;
pub(crate) mod utils;

pub use client::PgExecutor;
