use crate::model::{Cloud, GroupRole, NetworkType};

use super::template::{GroupTemplate, ProfileTemplate, RuleTemplate, SubnetTemplate};

const UBUNTU_IMAGE: &str = "GNU/Linux Ubuntu Server 16.04 Xenial Xerus x64";
const INSTANCE_SIZE: &str = "e3standard.x3";
const INTERNAL_CIDR: &str = "192.168.200.0/24";
const ANYWHERE: &str = "0.0.0.0/0";

/// Ubuntu 16.04 on ECS: one master and up to two nodes on a public network.
pub const UBUNTU_16_04: ProfileTemplate = ProfileTemplate {
    key: "ecs-ubuntu-16.04",
    description: "Ubuntu 16.04 cluster on ECS (1 master, 2 nodes, nl-ams1)",
    cloud: Cloud::Ecs,
    location: "nl-ams1",
    ssh_public_key_path: "~/.ssh/id_rsa.pub",
    ssh_user: "ubuntu",
    token_key: "INJECTEDTOKEN",
    api_port: "443",
    network_type: NetworkType::Public,
    internet_gateway: "default",
    groups: &[
        GroupTemplate {
            role: GroupRole::Master,
            max_count: 1,
            image: UBUNTU_IMAGE,
            size: INSTANCE_SIZE,
            bootstrap_scripts: &["bootstrap/ecs_k8s_ubuntu_16.04_master.sh"],
            subnets: Some(&[SubnetTemplate {
                name: "internal",
                cidr: INTERNAL_CIDR,
            }]),
            ingress: &[
                RuleTemplate::Tcp {
                    port: 22,
                    source: ANYWHERE,
                },
                RuleTemplate::Tcp {
                    port: 443,
                    source: ANYWHERE,
                },
                RuleTemplate::AllTraffic {
                    source: INTERNAL_CIDR,
                },
            ],
        },
        GroupTemplate {
            role: GroupRole::Node,
            max_count: 2,
            image: UBUNTU_IMAGE,
            size: INSTANCE_SIZE,
            bootstrap_scripts: &["bootstrap/ecs_k8s_ubuntu_16.04_node.sh"],
            subnets: None,
            ingress: &[
                RuleTemplate::Tcp {
                    port: 22,
                    source: ANYWHERE,
                },
                RuleTemplate::AllTraffic {
                    source: INTERNAL_CIDR,
                },
            ],
        },
    ],
};
