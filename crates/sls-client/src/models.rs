//! SLS API models
//!
//! These models match the JSON the System Layout Service emits. Field names
//! on the wire are PascalCase; type-specific properties stay opaque.
//! The service encodes empty lists and maps as `null`, so those fields
//! accept `null` as well as a missing key.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Deserialize `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Full snapshot of the service state, as returned by `/v1/dumpstate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SlsState {
    /// Hardware keyed by xname
    #[serde(default, deserialize_with = "null_as_default")]
    pub hardware: BTreeMap<String, GenericHardware>,
    /// Networks keyed by name
    #[serde(default, deserialize_with = "null_as_default")]
    pub networks: BTreeMap<String, Network>,
}

/// One physical or logical hardware component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenericHardware {
    /// Xname of the containing component
    pub parent: String,
    /// Xnames of contained components
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// Unique hierarchical identifier, e.g. "x3000c0s17b1n0"
    pub xname: String,
    /// Component type tag, e.g. "comptype_node"
    #[serde(rename = "Type")]
    pub hardware_type: String,
    /// Cabinet class: "River", "Mountain" or "Hill"
    pub class: String,
    /// HMS type name, e.g. "Node"
    pub type_string: String,
    /// Last modification, epoch seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    /// Last modification, human-readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,
    /// Type-specific properties
    #[serde(rename = "ExtraProperties", skip_serializing_if = "Option::is_none")]
    pub extra_properties: Option<serde_json::Value>,
    /// Secrets reference stored alongside the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_data: Option<serde_json::Value>,
}

impl GenericHardware {
    /// Create a hardware record with the given xname and type tag
    pub fn new(xname: impl Into<String>, hardware_type: impl Into<String>) -> Self {
        Self {
            xname: xname.into(),
            hardware_type: hardware_type.into(),
            ..Self::default()
        }
    }
}

/// One named network definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Network {
    /// Short name, the network's key, e.g. "HMN"
    pub name: String,
    /// Descriptive name
    pub full_name: String,
    /// CIDR ranges the network covers
    #[serde(rename = "IPRanges", deserialize_with = "null_as_default")]
    pub ip_ranges: Vec<String>,
    /// Network type, e.g. "ethernet" or "slingshot10"
    #[serde(rename = "Type")]
    pub network_type: String,
    /// Last modification, epoch seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    /// Last modification, human-readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,
    /// Subnets, VLANs and other type-specific properties
    #[serde(rename = "ExtraProperties", skip_serializing_if = "Option::is_none")]
    pub extra_properties: Option<serde_json::Value>,
}

impl Network {
    /// Create a network record with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hardware_decodes_with_missing_fields() {
        let hw: GenericHardware =
            serde_json::from_value(json!({"Xname": "x1000", "Type": "comptype_cabinet"})).unwrap();
        assert_eq!(hw.xname, "x1000");
        assert_eq!(hw.hardware_type, "comptype_cabinet");
        assert!(hw.children.is_empty());
        assert!(hw.extra_properties.is_none());
    }

    #[test]
    fn test_hardware_wire_field_names() {
        let mut hw = GenericHardware::new("x3000c0s1b0n0", "comptype_node");
        hw.parent = "x3000c0s1b0".to_string();
        hw.class = "River".to_string();
        hw.extra_properties = Some(json!({"Role": "Management", "NID": 100_001}));

        let value = serde_json::to_value(&hw).unwrap();
        assert_eq!(value["Xname"], "x3000c0s1b0n0");
        assert_eq!(value["Type"], "comptype_node");
        assert_eq!(value["Parent"], "x3000c0s1b0");
        assert_eq!(value["ExtraProperties"]["Role"], "Management");
        // Empty and absent fields are left out
        assert!(value.get("Children").is_none());
        assert!(value.get("LastUpdated").is_none());
        assert!(value.get("VaultData").is_none());
    }

    #[test]
    fn test_network_ip_ranges_field() {
        let net: Network = serde_json::from_value(json!({
            "Name": "HMN",
            "FullName": "Hardware Management Network",
            "IPRanges": ["10.254.0.0/17"],
            "Type": "ethernet"
        }))
        .unwrap();
        assert_eq!(net.ip_ranges, vec!["10.254.0.0/17".to_string()]);
        assert_eq!(net.network_type, "ethernet");
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let net: Network = serde_json::from_str(
            r#"{"Name":"HMN","FullName":"","IPRanges":null,"Type":"ethernet"}"#,
        )
        .unwrap();
        assert!(net.ip_ranges.is_empty());

        let hw: Vec<GenericHardware> = serde_json::from_str(
            r#"[{"Parent":"x3000","Children":null,"Xname":"x3000c0s1b0","Type":"comptype_ncard"}]"#,
        )
        .unwrap();
        assert!(hw[0].children.is_empty());

        let state: SlsState = serde_json::from_str(r#"{"Hardware":null,"Networks":null}"#).unwrap();
        assert_eq!(state, SlsState::default());
    }

    #[test]
    fn test_state_defaults_to_empty_collections() {
        let state: SlsState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, SlsState::default());
    }
}
