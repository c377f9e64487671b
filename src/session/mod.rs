/// Session client: login, logout, request posting, scoped use
pub mod client;

pub use client::*;
