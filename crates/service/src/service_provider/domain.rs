use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use models::service_provider;

use super::errors::ServiceProviderError;

/// SAML service provider registered in an identity zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlServiceProvider {
    /// Store-generated identifier; empty until the record is created.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub version: i32,
    /// Set by the store; `None` on records that were never persisted.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    pub name: String,
    pub entity_id: String,
    #[serde(default)]
    pub config: SamlServiceProviderDefinition,
    pub identity_zone_id: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool { true }

impl SamlServiceProvider {
    /// New, not yet persisted, active service provider.
    pub fn new(
        name: impl Into<String>,
        entity_id: impl Into<String>,
        identity_zone_id: impl Into<String>,
        config: SamlServiceProviderDefinition,
    ) -> Self {
        Self {
            id: String::new(),
            version: 0,
            created: None,
            last_modified: None,
            name: name.into(),
            entity_id: entity_id.into(),
            config,
            identity_zone_id: identity_zone_id.into(),
            active: true,
        }
    }
}

/// Nested SAML configuration of a service provider, stored as JSON text in
/// the `config` column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SamlServiceProviderDefinition {
    /// Inline metadata XML or a URL to fetch it from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data_location: Option<String>,
    pub sp_entity_id: String,
    pub zone_id: String,
    #[serde(rename = "nameID", skip_serializing_if = "Option::is_none")]
    pub name_id: Option<String>,
    pub single_sign_on_service_index: i32,
    pub metadata_trust_check: bool,
    pub skip_ssl_validation: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_mappings: BTreeMap<String, String>,
}

impl SamlServiceProviderDefinition {
    /// Typed view of a loosely typed config payload.
    ///
    /// ```
    /// use service::service_provider::SamlServiceProviderDefinition;
    /// let def = SamlServiceProviderDefinition::from_value(serde_json::json!({
    ///     "metaDataLocation": "https://sp.example.com/saml/metadata",
    ///     "nameID": "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress"
    /// })).unwrap();
    /// assert_eq!(def.meta_data_location.as_deref(), Some("https://sp.example.com/saml/metadata"));
    /// assert!(SamlServiceProviderDefinition::from_value(serde_json::json!("metadata")).is_err());
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, ServiceProviderError> {
        serde_json::from_value(value).map_err(|e| {
            ServiceProviderError::InvalidArgument(format!("config is not a SAML service provider definition: {e}"))
        })
    }

    pub(crate) fn to_column(&self) -> Result<String, ServiceProviderError> {
        serde_json::to_string(self).map_err(|e| ServiceProviderError::InvalidConfig(e.to_string()))
    }

    pub(crate) fn from_column(raw: Option<&str>) -> Result<Self, ServiceProviderError> {
        match raw {
            None => Ok(Self::default()),
            Some(text) => serde_json::from_str(text).map_err(|e| ServiceProviderError::InvalidConfig(e.to_string())),
        }
    }
}

impl TryFrom<service_provider::Model> for SamlServiceProvider {
    type Error = ServiceProviderError;

    fn try_from(row: service_provider::Model) -> Result<Self, Self::Error> {
        let mut config = SamlServiceProviderDefinition::from_column(row.config.as_deref())?;
        // The columns own the identity; a stale config never overrides them.
        config.sp_entity_id = row.entity_id.clone();
        config.zone_id = row.identity_zone_id.clone();
        Ok(Self {
            id: row.id.trim().to_string(),
            version: row.version,
            created: Some(row.created.with_timezone(&Utc)),
            last_modified: Some(row.last_modified.with_timezone(&Utc)),
            name: row.name,
            entity_id: row.entity_id,
            config,
            identity_zone_id: row.identity_zone_id,
            active: row.active,
        })
    }
}
