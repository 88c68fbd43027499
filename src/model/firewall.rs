use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallConfig {
    pub name: String,
    pub ingress_rules: Vec<IngressRule>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => f.write_str("tcp"),
            Protocol::Udp => f.write_str("udp"),
        }
    }
}

/// An inbound permission. `AllTraffic` admits every port and protocol
/// from `source` and nothing else.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IngressRule {
    #[serde(rename_all = "camelCase")]
    PortRange {
        from_port: u16,
        to_port: u16,
        protocol: Protocol,
        source: String,
    },
    #[serde(rename_all = "camelCase")]
    AllTraffic { source: String },
}

impl IngressRule {
    pub fn tcp(port: u16, source: impl Into<String>) -> Self {
        IngressRule::PortRange {
            from_port: port,
            to_port: port,
            protocol: Protocol::Tcp,
            source: source.into(),
        }
    }

    pub fn all_traffic(source: impl Into<String>) -> Self {
        IngressRule::AllTraffic {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            IngressRule::PortRange { source, .. } | IngressRule::AllTraffic { source } => source,
        }
    }

    /// The `(from, to)` port pair, or `None` for an all-traffic rule.
    pub fn ports(&self) -> Option<(u16, u16)> {
        match self {
            IngressRule::PortRange {
                from_port, to_port, ..
            } => Some((*from_port, *to_port)),
            IngressRule::AllTraffic { .. } => None,
        }
    }

    pub fn is_all_traffic(&self) -> bool {
        matches!(self, IngressRule::AllTraffic { .. })
    }
}

impl fmt::Display for IngressRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngressRule::PortRange {
                from_port,
                to_port,
                protocol,
                source,
            } if from_port == to_port => write!(f, "{protocol}/{from_port} from {source}"),
            IngressRule::PortRange {
                from_port,
                to_port,
                protocol,
                source,
            } => write!(f, "{protocol}/{from_port}-{to_port} from {source}"),
            IngressRule::AllTraffic { source } => write!(f, "all from {source}"),
        }
    }
}
