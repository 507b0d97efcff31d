//! Query router — keyword intent routing over a shared conversation log.

pub mod agents;
pub mod classifier;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod routes;
pub mod summarizer;
