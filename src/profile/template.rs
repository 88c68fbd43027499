use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use crate::error::{AppError, AppResult};
use crate::model::{
    Cloud, ClusterSpec, ControlPlaneConfig, FirewallConfig, GroupRole, IngressRule,
    InternetGateway, KubernetesApi, MachineGroupConfig, NetworkConfig, NetworkType, SshConfig,
    Subnet,
};
use crate::token::BootstrapToken;

/// A cluster profile expressed as data. Instantiating it substitutes the
/// cluster name and injects the bootstrap token.
#[derive(Debug, Clone, Copy)]
pub struct ProfileTemplate {
    pub key: &'static str,
    pub description: &'static str,
    pub cloud: Cloud,
    pub location: &'static str,
    pub ssh_public_key_path: &'static str,
    pub ssh_user: &'static str,
    pub token_key: &'static str,
    pub api_port: &'static str,
    pub network_type: NetworkType,
    pub internet_gateway: &'static str,
    pub groups: &'static [GroupTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct GroupTemplate {
    pub role: GroupRole,
    pub max_count: u32,
    pub image: &'static str,
    pub size: &'static str,
    pub bootstrap_scripts: &'static [&'static str],
    pub subnets: Option<&'static [SubnetTemplate]>,
    pub ingress: &'static [RuleTemplate],
}

#[derive(Debug, Clone, Copy)]
pub struct SubnetTemplate {
    pub name: &'static str,
    pub cidr: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleTemplate {
    Tcp { port: u16, source: &'static str },
    AllTraffic { source: &'static str },
}

impl ProfileTemplate {
    pub fn instantiate(&self, name: &str, token: BootstrapToken) -> AppResult<ClusterSpec> {
        if self.api_port.parse::<u16>().is_err() {
            return Err(AppError::Template(format!(
                "{}: api port {:?} is not a port number",
                self.key, self.api_port
            )));
        }

        let mut values = BTreeMap::new();
        values.insert(self.token_key.to_string(), token);

        let control_plane = ControlPlaneConfig {
            cloud: self.cloud,
            location: self.location.to_string(),
            ssh: SshConfig {
                public_key_path: self.ssh_public_key_path.to_string(),
                user: self.ssh_user.to_string(),
            },
            values,
            kubernetes_api: KubernetesApi {
                port: self.api_port.to_string(),
            },
            network: NetworkConfig {
                kind: self.network_type,
                internet_gateway: InternetGateway {
                    name: self.internet_gateway.to_string(),
                },
            },
        };

        let machine_groups = self
            .groups
            .iter()
            .map(|group| group.instantiate(self.key, name))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ClusterSpec::new(name, control_plane, machine_groups))
    }
}

impl GroupTemplate {
    fn instantiate(&self, key: &str, cluster_name: &str) -> AppResult<MachineGroupConfig> {
        let name = format!("{cluster_name}-{}", self.role.as_str());

        let subnets = self
            .subnets
            .map(|subnets| {
                subnets
                    .iter()
                    .map(|subnet| -> AppResult<Subnet> {
                        check_cidr(key, subnet.cidr)?;
                        Ok(Subnet {
                            name: subnet.name.to_string(),
                            cidr: subnet.cidr.to_string(),
                        })
                    })
                    .collect::<AppResult<Vec<_>>>()
            })
            .transpose()?;

        let ingress_rules = self
            .ingress
            .iter()
            .map(|rule| -> AppResult<IngressRule> {
                match *rule {
                    RuleTemplate::Tcp { port, source } => {
                        check_cidr(key, source)?;
                        Ok(IngressRule::tcp(port, source))
                    }
                    RuleTemplate::AllTraffic { source } => {
                        check_cidr(key, source)?;
                        Ok(IngressRule::all_traffic(source))
                    }
                }
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(MachineGroupConfig {
            role: self.role,
            name: name.clone(),
            max_count: self.max_count,
            image: self.image.to_string(),
            size: self.size.to_string(),
            bootstrap_scripts: self
                .bootstrap_scripts
                .iter()
                .map(|script| script.to_string())
                .collect(),
            subnets,
            firewalls: vec![FirewallConfig {
                name,
                ingress_rules,
            }],
        })
    }
}

fn check_cidr(key: &str, cidr: &str) -> AppResult<()> {
    if is_ipv4_cidr(cidr) {
        return Ok(());
    }

    Err(AppError::Template(format!("{key}: {cidr:?} is not an IPv4 CIDR")))
}

fn is_ipv4_cidr(value: &str) -> bool {
    let Some((addr, prefix)) = value.split_once('/') else {
        return false;
    };

    addr.parse::<Ipv4Addr>().is_ok() && prefix.parse::<u8>().is_ok_and(|len| len <= 32)
}
