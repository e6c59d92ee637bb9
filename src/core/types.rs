//! Domain identifiers and records exchanged with the control plane.

use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

/// Opaque fleet identifier supplied by the operator.
///
/// Never validated locally; the control plane decides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FleetId(String);

impl FleetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a single compute resource within a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An instance as reported by the instance listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub id: InstanceId,
    pub status: Option<String>,
    pub ip_address: Option<String>,
    pub operating_system: Option<String>,
}

impl InstanceRecord {
    /// Record carrying only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: InstanceId::new(id),
            status: None,
            ip_address: None,
            operating_system: None,
        }
    }
}

/// Short-lived compute access credentials.
///
/// Values are wiped from memory on drop. `Debug` redacts the secret parts.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: session_token.into(),
        }
    }

    /// Value of a single credential field.
    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::AccessKeyId => &self.access_key_id,
            CredentialField::SecretAccessKey => &self.secret_access_key,
            CredentialField::SessionToken => &self.session_token,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.access_key_id.zeroize();
        self.secret_access_key.zeroize();
        self.session_token.zeroize();
    }
}

/// The fields of a credential triple, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    AccessKeyId,
    SecretAccessKey,
    SessionToken,
}

impl CredentialField {
    /// All fields in the order they are exported.
    pub const ALL: [CredentialField; 3] = [
        CredentialField::AccessKeyId,
        CredentialField::SecretAccessKey,
        CredentialField::SessionToken,
    ];

    /// Human-readable label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccessKeyId => "Access Key ID",
            Self::SecretAccessKey => "Secret Access Key",
            Self::SessionToken => "Session Token",
        }
    }
}

/// A build registered with the control plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl BuildRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            version: None,
            status: None,
        }
    }
}
