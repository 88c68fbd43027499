pub mod cluster;
pub mod firewall;

pub use cluster::{
    Cloud, ClusterSpec, ControlPlaneConfig, GroupRole, InternetGateway, KubernetesApi,
    MachineGroupConfig, NetworkConfig, NetworkType, SshConfig, Subnet,
};
pub use firewall::{FirewallConfig, IngressRule, Protocol};
