use crate::error::AppResult;
use crate::model::ClusterSpec;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

/// Human readable summary of a cluster profile. Token values are omitted.
pub fn cluster_summary(spec: &ClusterSpec) -> String {
    let control_plane = &spec.control_plane;
    let mut lines = vec![
        format!("cluster: {}", spec.name),
        format!(
            "  cloud: {} ({})",
            control_plane.cloud.as_str(),
            control_plane.location
        ),
        format!(
            "  ssh: user {} key {}",
            control_plane.ssh.user, control_plane.ssh.public_key_path
        ),
        format!("  api port: {}", control_plane.kubernetes_api.port),
    ];

    for key in control_plane.values.keys() {
        lines.push(format!("  value: {key} (redacted)"));
    }

    for group in &spec.machine_groups {
        lines.push(format!(
            "  {} [{}] x{} {} / {}",
            group.name,
            group.role.as_str(),
            group.max_count,
            group.size,
            group.image
        ));
        for subnet in group.subnets() {
            lines.push(format!("    subnet {} {}", subnet.name, subnet.cidr));
        }
        for firewall in &group.firewalls {
            for rule in &firewall.ingress_rules {
                lines.push(format!("    allow {rule}"));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;
    use crate::token::{BootstrapToken, StaticTokenSource};

    #[test]
    fn summary_lists_groups_and_hides_token() {
        let tokens = StaticTokenSource::new(BootstrapToken::new("abcdef.0123456789abcdef"));
        let spec = profile::build_profile("demo", &tokens).expect("profile");
        let summary = cluster_summary(&spec);

        assert!(summary.contains("demo-master [master] x1"));
        assert!(summary.contains("demo-node [node] x2"));
        assert!(summary.contains("allow tcp/443 from 0.0.0.0/0"));
        assert!(summary.contains("INJECTEDTOKEN (redacted)"));
        assert!(!summary.contains("0123456789abcdef"));
    }
}
