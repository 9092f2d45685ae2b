//! Mock SlsClient for unit testing
//!
//! This module provides a mock implementation of SlsClientTrait that can be used
//! in unit tests without requiring a running SLS instance.

use crate::client::validate_network_name;
use crate::error::SlsError;
use crate::models::*;
use crate::sls_trait::SlsClientTrait;
use crate::xname;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock SlsClient for testing
///
/// Stores hardware and networks in memory. Writes apply the same local
/// validation as the real client; reads are served from the store.
#[derive(Debug, Clone)]
pub struct MockSlsClient {
    base_url: String,
    hardware: Arc<Mutex<BTreeMap<String, GenericHardware>>>,
    networks: Arc<Mutex<BTreeMap<String, Network>>>,
    // Status code to fail every call with, if set
    fail_with: Arc<Mutex<Option<u16>>>,
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockSlsClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            hardware: Arc::new(Mutex::new(BTreeMap::new())),
            networks: Arc::new(Mutex::new(BTreeMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Seed the store with a full state (for test setup)
    pub fn load_state(&self, state: SlsState) {
        *lock(&self.hardware) = state.hardware;
        *lock(&self.networks) = state.networks;
    }

    /// Make every following call fail as if SLS answered with `status`
    pub fn fail_with_status(&self, status: Option<u16>) {
        *lock(&self.fail_with) = status;
    }

    /// Look up stored hardware by xname
    pub fn hardware(&self, xname: &str) -> Option<GenericHardware> {
        lock(&self.hardware).get(xname).cloned()
    }

    /// Look up a stored network by name
    pub fn network(&self, name: &str) -> Option<Network> {
        lock(&self.networks).get(name).cloned()
    }

    fn check_failure(&self, expected: &'static str) -> Result<(), SlsError> {
        match *lock(&self.fail_with) {
            Some(status) => Err(SlsError::UnexpectedStatus { status, expected }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl SlsClientTrait for MockSlsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_dump_state(&self) -> Result<SlsState, SlsError> {
        self.check_failure("200")?;
        Ok(SlsState {
            hardware: lock(&self.hardware).clone(),
            networks: lock(&self.networks).clone(),
        })
    }

    async fn get_all_hardware(&self) -> Result<Vec<GenericHardware>, SlsError> {
        self.check_failure("200")?;
        Ok(lock(&self.hardware).values().cloned().collect())
    }

    async fn put_hardware(&self, hardware: &GenericHardware) -> Result<(), SlsError> {
        if !xname::is_valid(&hardware.xname) {
            return Err(SlsError::Validation(format!(
                "hardware has invalid xname {}",
                hardware.xname
            )));
        }
        self.check_failure("200 or 201")?;
        lock(&self.hardware).insert(hardware.xname.clone(), hardware.clone());
        Ok(())
    }

    async fn put_network(&self, network: &Network) -> Result<(), SlsError> {
        validate_network_name(&network.name)?;
        self.check_failure("200 or 201")?;
        lock(&self.networks).insert(network.name.clone(), network.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_dump() {
        let mock = MockSlsClient::new("http://cray-sls");
        mock.put_hardware(&GenericHardware::new("x3000c0s1b0n0", "comptype_node"))
            .await
            .unwrap();
        mock.put_network(&Network::new("HMN")).await.unwrap();

        let state = mock.get_dump_state().await.unwrap();
        assert!(state.hardware.contains_key("x3000c0s1b0n0"));
        assert!(state.networks.contains_key("HMN"));
        assert_eq!(mock.get_all_hardware().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing() {
        let mock = MockSlsClient::new("http://cray-sls");
        let mut hw = GenericHardware::new("x3000", "comptype_cabinet");
        mock.put_hardware(&hw).await.unwrap();
        hw.class = "River".to_string();
        mock.put_hardware(&hw).await.unwrap();
        assert_eq!(mock.hardware("x3000").unwrap().class, "River");
    }

    #[tokio::test]
    async fn test_validation_matches_real_client() {
        let mock = MockSlsClient::new("http://cray-sls");
        let bad_hw = mock.put_hardware(&GenericHardware::new("not-an-xname", "comptype_node")).await;
        assert!(matches!(bad_hw, Err(SlsError::Validation(_))));
        let bad_net = mock.put_network(&Network::new("net 1")).await;
        assert!(matches!(bad_net, Err(SlsError::Validation(_))));
        assert!(mock.network("net 1").is_none());
    }

    #[tokio::test]
    async fn test_fail_with_status() {
        let mock = MockSlsClient::new("http://cray-sls");
        mock.fail_with_status(Some(503));
        let err = mock.get_dump_state().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "unexpected status code 503 expected 200");
    }
}
