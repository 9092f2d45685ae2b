//! SLS REST API Client
//!
//! A Rust client library for the System Layout Service (SLS), the inventory
//! of hardware components and network definitions in an HPE Cray EX/HPCM
//! style management plane.
//!
//! # Example
//!
//! ```no_run
//! use sls_client::{GenericHardware, Network, SlsClient};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SlsClient::with_default_transport("http://cray-sls", "hms-discovery")?
//!     .with_api_token("your-api-token");
//!
//! // Fetch everything SLS knows about
//! let state = client.get_dump_state().await?;
//! println!("{} hardware records", state.hardware.len());
//!
//! // Create or update a node; 200 and 201 are both success
//! let node = GenericHardware::new("x3000c0s17b1n0", "comptype_node");
//! client.put_hardware(&node).await?;
//!
//! // Bound a call with a deadline; dropping the future cancels the request
//! tokio::time::timeout(Duration::from_secs(5), client.put_network(&Network::new("HMN"))).await??;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Pluggable transport**: any [`HttpTransport`], `reqwest::Client` by default
//! - **Local validation**: xnames and network names are checked before sending
//! - **Mocking**: [`SlsClientTrait`] plus `MockSlsClient` behind `test-util`

pub mod client;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod sls_trait;
pub mod transport;
pub mod user_agent;
pub mod xname;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::SlsClient;
pub use config::ClientConfig;
pub use error::SlsError;
pub use models::*;
pub use sls_trait::SlsClientTrait;
pub use transport::HttpTransport;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockSlsClient;
