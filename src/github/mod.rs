mod client;
mod repo;

pub use client::Client;
pub use repo::Repo;
