use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Provider-side proxy routing for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProxyMode {
    #[serde(rename = "CF_PROXY_ON")]
    On,
    #[serde(rename = "CF_PROXY_OFF")]
    Off,
}

impl From<bool> for ProxyMode {
    fn from(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }
}

impl fmt::Display for ProxyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("CF_PROXY_ON"),
            Self::Off => f.write_str("CF_PROXY_OFF"),
        }
    }
}

/// Record types a declaration may carry, in compilation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Txt,
    A,
    Aaaa,
    Cname,
    Ns,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "TXT",
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DNS resource record to be committed for a label.
///
/// Serializes as `{"type": "CNAME", "name": "foo", "target": "bar.example.com.", "proxy": "CF_PROXY_ON"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RecordOp {
    Txt { name: String, value: String },
    A { name: String, address: Ipv4Addr, proxy: ProxyMode },
    Aaaa { name: String, address: String, proxy: ProxyMode },
    Cname { name: String, target: String, proxy: ProxyMode },
    Ns { name: String, target: String },
}

impl RecordOp {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Txt { .. } => RecordKind::Txt,
            Self::A { .. } => RecordKind::A,
            Self::Aaaa { .. } => RecordKind::Aaaa,
            Self::Cname { .. } => RecordKind::Cname,
            Self::Ns { .. } => RecordKind::Ns,
        }
    }

    /// Label the record is attached to, relative to its root domain.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Txt { name, .. }
            | Self::A { name, .. }
            | Self::Aaaa { name, .. }
            | Self::Cname { name, .. }
            | Self::Ns { name, .. } => name,
        }
    }
}
