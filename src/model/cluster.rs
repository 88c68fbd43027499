use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::token::BootstrapToken;

use super::firewall::FirewallConfig;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    Ecs,
}

impl Cloud {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cloud::Ecs => "ecs",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Master,
    Node,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Master => "master",
            GroupRole::Node => "node",
        }
    }
}

/// Declarative description of a cluster: one control plane and its
/// machine groups, master first.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub name: String,
    pub control_plane: ControlPlaneConfig,
    pub machine_groups: Vec<MachineGroupConfig>,
}

impl ClusterSpec {
    pub fn new(
        name: impl Into<String>,
        control_plane: ControlPlaneConfig,
        machine_groups: Vec<MachineGroupConfig>,
    ) -> Self {
        Self {
            name: name.into(),
            control_plane,
            machine_groups,
        }
    }

    pub fn group(&self, role: GroupRole) -> Option<&MachineGroupConfig> {
        self.machine_groups.iter().find(|group| group.role == role)
    }

    pub fn master(&self) -> Option<&MachineGroupConfig> {
        self.group(GroupRole::Master)
    }

    pub fn node(&self) -> Option<&MachineGroupConfig> {
        self.group(GroupRole::Node)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    pub cloud: Cloud,
    pub location: String,
    pub ssh: SshConfig,
    /// Values injected into bootstrap scripts, keyed by placeholder name.
    pub values: BTreeMap<String, BootstrapToken>,
    pub kubernetes_api: KubernetesApi,
    pub network: NetworkConfig,
}

impl ControlPlaneConfig {
    pub fn value(&self, key: &str) -> Option<&BootstrapToken> {
        self.values.get(key)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfig {
    pub public_key_path: String,
    pub user: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesApi {
    pub port: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(rename = "type")]
    pub kind: NetworkType,
    pub internet_gateway: InternetGateway,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InternetGateway {
    pub name: String,
}

/// A homogeneous pool of instances sharing image, size and firewalls.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineGroupConfig {
    pub role: GroupRole,
    pub name: String,
    pub max_count: u32,
    pub image: String,
    pub size: String,
    pub bootstrap_scripts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Subnet>>,
    pub firewalls: Vec<FirewallConfig>,
}

impl MachineGroupConfig {
    pub fn subnets(&self) -> &[Subnet] {
        self.subnets.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    pub name: String,
    pub cidr: String,
}
