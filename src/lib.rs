pub mod api;
pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod explore;
pub mod pager;
pub mod pokedex;

pub use api::*;
pub use cache::*;
pub use client::*;
pub use commands::*;
pub use config::*;
pub use error::*;
pub use explore::*;
pub use pager::*;
pub use pokedex::*;
