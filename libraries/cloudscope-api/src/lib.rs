//! Cloudscope API Client
//!
//! HTTP client for the SoundCloud-style track API used by the search connector.
//!
//! # Features
//!
//! - **Track search**: `/tracks.json` with keyword, limit and ordering
//! - **Favorites**: `/me/favorites.json` for a linked account's OAuth token
//! - **Error mapping**: transport, status and decode failures kept apart
//!
//! # Example
//!
//! ```ignore
//! use cloudscope_api::{ApiConfig, SoundCloudClient};
//! use cloudscope_core::{Endpoint, Route};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SoundCloudClient::new(ApiConfig::new("my-client-id"))?;
//!
//!     let route = Route::new(Endpoint::Tracks)
//!         .with_param("q", "jazz")
//!         .with_param("limit", "30");
//!     let tracks = client.fetch_tracks(&route).await?;
//!     println!("Found {} tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::SoundCloudClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
