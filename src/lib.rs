pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

pub use store::{PortfolioStore, open_store};
