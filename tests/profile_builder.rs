use kprofile::model::{
    Cloud, ClusterSpec, FirewallConfig, GroupRole, IngressRule, NetworkType, Protocol,
};
use kprofile::profile::build_profile;
use kprofile::token::{BootstrapToken, KubeadmTokenSource, StaticTokenSource};

const NAMES: &[&str] = &["demo", "a", "prod-eu-1", "x9"];

fn fixed_tokens() -> StaticTokenSource {
    StaticTokenSource::new(BootstrapToken::new("abcdef.0123456789abcdef"))
}

fn firewall(spec: &ClusterSpec, role: GroupRole) -> &FirewallConfig {
    let group = spec.group(role).expect("group present");
    assert_eq!(group.firewalls.len(), 1);
    &group.firewalls[0]
}

fn ports(firewall: &FirewallConfig) -> Vec<Option<(u16, u16)>> {
    firewall.ingress_rules.iter().map(IngressRule::ports).collect()
}

#[test]
fn demo_profile_matches_ecs_ubuntu_layout() {
    let spec = build_profile("demo", &fixed_tokens()).expect("profile");

    assert_eq!(spec.name, "demo");
    let control_plane = &spec.control_plane;
    assert_eq!(control_plane.cloud, Cloud::Ecs);
    assert_eq!(control_plane.location, "nl-ams1");
    assert_eq!(control_plane.ssh.public_key_path, "~/.ssh/id_rsa.pub");
    assert_eq!(control_plane.ssh.user, "ubuntu");
    assert_eq!(control_plane.kubernetes_api.port, "443");
    assert_eq!(control_plane.network.kind, NetworkType::Public);
    assert_eq!(control_plane.network.internet_gateway.name, "default");
    assert_eq!(control_plane.values.len(), 1);
    assert!(control_plane.value("INJECTEDTOKEN").is_some());

    let roles: Vec<_> = spec.machine_groups.iter().map(|group| group.role).collect();
    assert_eq!(roles, [GroupRole::Master, GroupRole::Node]);

    let master = spec.master().expect("master");
    assert_eq!(master.name, "demo-master");
    assert_eq!(master.image, "GNU/Linux Ubuntu Server 16.04 Xenial Xerus x64");
    assert_eq!(master.size, "e3standard.x3");
    assert_eq!(
        master.bootstrap_scripts,
        ["bootstrap/ecs_k8s_ubuntu_16.04_master.sh"]
    );

    let node = spec.node().expect("node");
    assert_eq!(node.name, "demo-node");
    assert_eq!(node.image, master.image);
    assert_eq!(node.size, master.size);
    assert_eq!(node.bootstrap_scripts, ["bootstrap/ecs_k8s_ubuntu_16.04_node.sh"]);
}

#[test]
fn derived_names_and_counts_hold_for_every_name() {
    for name in NAMES {
        let spec = build_profile(name, &fixed_tokens()).expect("profile");
        let master = spec.master().expect("master");
        let node = spec.node().expect("node");

        assert_eq!(master.name, format!("{name}-master"));
        assert_eq!(node.name, format!("{name}-node"));
        assert_eq!(master.max_count, 1);
        assert_eq!(node.max_count, 2);
        assert_eq!(firewall(&spec, GroupRole::Master).name, master.name);
        assert_eq!(firewall(&spec, GroupRole::Node).name, node.name);
    }
}

#[test]
fn firewall_rules_hold_for_every_name() {
    for name in NAMES {
        let spec = build_profile(name, &fixed_tokens()).expect("profile");

        let master = firewall(&spec, GroupRole::Master);
        assert_eq!(ports(master), [Some((22, 22)), Some((443, 443)), None]);

        let node = firewall(&spec, GroupRole::Node);
        assert_eq!(ports(node), [Some((22, 22)), None]);

        for rule in master.ingress_rules.iter().chain(&node.ingress_rules) {
            if rule.is_all_traffic() {
                assert_eq!(rule.source(), "192.168.200.0/24");
                assert!(rule.ports().is_none());
                continue;
            }

            assert_eq!(rule.source(), "0.0.0.0/0");
            assert!(matches!(
                rule,
                IngressRule::PortRange {
                    protocol: Protocol::Tcp,
                    ..
                }
            ));
        }

        let wildcards = master
            .ingress_rules
            .iter()
            .chain(&node.ingress_rules)
            .filter(|rule| rule.is_all_traffic())
            .count();
        assert_eq!(wildcards, 2);
    }
}

#[test]
fn subnets_hold_for_every_name() {
    for name in NAMES {
        let spec = build_profile(name, &fixed_tokens()).expect("profile");

        let master = spec.master().expect("master");
        assert_eq!(master.subnets().len(), 1);
        assert_eq!(master.subnets()[0].name, "internal");
        assert_eq!(master.subnets()[0].cidr, "192.168.200.0/24");

        let node = spec.node().expect("node");
        assert!(node.subnets.is_none());
        assert!(node.subnets().is_empty());
    }
}

#[test]
fn repeated_builds_differ_only_in_token() {
    let tokens = KubeadmTokenSource::new();
    let first = build_profile("demo", &tokens).expect("profile");
    let mut second = build_profile("demo", &tokens).expect("profile");

    let first_token = first.control_plane.value("INJECTEDTOKEN").expect("token");
    let second_token = second.control_plane.value("INJECTEDTOKEN").expect("token");
    assert_ne!(first_token, second_token);

    second.control_plane.values = first.control_plane.values.clone();
    assert_eq!(first, second);
}

#[test]
fn profile_serializes_with_explicit_rule_kinds() {
    let spec = build_profile("demo", &fixed_tokens()).expect("profile");
    let value = serde_json::to_value(&spec).expect("json");

    assert_eq!(value["controlPlane"]["values"]["INJECTEDTOKEN"], "abcdef.0123456789abcdef");
    assert_eq!(value["controlPlane"]["network"]["type"], "public");
    let rules = &value["machineGroups"][0]["firewalls"][0]["ingressRules"];
    assert_eq!(rules[0]["kind"], "portRange");
    assert_eq!(rules[0]["fromPort"], 22);
    assert_eq!(rules[2]["kind"], "allTraffic");
    assert!(value["machineGroups"][1].get("subnets").is_none());

    let parsed: ClusterSpec = serde_json::from_value(value).expect("round trip");
    assert_eq!(parsed, spec);
}

#[test]
fn debug_output_never_contains_token() {
    let spec = build_profile("demo", &fixed_tokens()).expect("profile");
    let debug = format!("{spec:?}");
    assert!(!debug.contains("0123456789abcdef"));
}
