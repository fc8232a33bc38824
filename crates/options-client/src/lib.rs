//! HTTP client library for the Options Tool API.
//!
//! This crate provides a typed HTTP client for every endpoint of the Options
//! Tool backend.
//!
//! # Example
//!
//! ```no_run
//! use options_client::{OptionsClient, ClientConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), options_client::Error> {
//!     let client = OptionsClient::new(ClientConfig {
//!         base_url: "http://localhost:8080".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     // Check health
//!     let health = client.health_check().await?;
//!     println!("Status: {}", health.status);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, OptionsClient};
pub use error::Error;
pub use types::*;
