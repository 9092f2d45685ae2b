//! SlsClient trait for mocking
//!
//! This trait abstracts the SlsClient so services that depend on SLS can be
//! unit-tested against [`crate::mock::MockSlsClient`] (feature `test-util`).

use crate::error::SlsError;
use crate::models::*;

/// Trait for SLS API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait SlsClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Fetch the full state dump
    async fn get_dump_state(&self) -> Result<SlsState, SlsError>;
    /// List every hardware record
    async fn get_all_hardware(&self) -> Result<Vec<GenericHardware>, SlsError>;
    /// Create or update a hardware record
    async fn put_hardware(&self, hardware: &GenericHardware) -> Result<(), SlsError>;
    /// Create or update a network
    async fn put_network(&self, network: &Network) -> Result<(), SlsError>;
}
