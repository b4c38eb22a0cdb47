//! Hand-authored persona templates.
//!
//! These predate the taxonomy and carry tuned copy and gradients. When an id
//! exists both here and in the taxonomy, the template supplies the card copy
//! and the category supplies the evidence.

#[derive(Debug)]
pub struct LegacyTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub title_prefixes: &'static [&'static str],
    pub taglines: &'static [&'static str],
    pub icon: &'static str,
    pub accent_color: &'static str,
    pub bg_gradient: &'static str,
    pub stat_labels: [&'static str; 4],
    pub stack_pool: &'static [&'static str],
}

pub const TEMPLATES: &[LegacyTemplate] = &[
    LegacyTemplate {
        id: "systems",
        title: "Systems Engineer",
        title_prefixes: &["Principal", "Senior", "Staff", "Lead"],
        taglines: &[
            "I speak fluent syscall.",
            "Closer to the metal than your bootloader.",
            "The kernel whisperer.",
        ],
        icon: "\u{2699}\u{FE0F}",
        accent_color: "#4A90D9",
        bg_gradient: "linear-gradient(135deg, #0a1628 0%, #132744 100%)",
        stat_labels: ["Architecture", "Debugging", "Scale", "Uptime"],
        stack_pool: &[
            "Linux", "systemd", "PostgreSQL", "ZFS", "Bare Metal", "Kernel Tuning", "Proxmox",
            "QEMU", "KVM", "InfiniBand", "NVMe", "io_uring", "eBPF", "Zig", "C",
        ],
    },
    LegacyTemplate {
        id: "platform",
        title: "Platform Engineer",
        title_prefixes: &["Staff", "Senior", "Principal", "Lead"],
        taglines: &[
            "Your deploy pipeline is my canvas.",
            "Infrastructure as Code, chaos as a service.",
            "I automate the automators.",
        ],
        icon: "\u{1F517}",
        accent_color: "#7C4DFF",
        bg_gradient: "linear-gradient(135deg, #1a0a2e 0%, #2d1b4e 100%)",
        stat_labels: ["Pipelines", "Automation", "Tooling", "DX"],
        stack_pool: &[
            "Kubernetes", "Helm", "Terraform", "Ansible", "Docker", "GitLab CI/CD",
            "GitHub Actions", "AWS CDK", "Pulumi", "ArgoCD", "Nix", "Buildroot",
        ],
    },
    LegacyTemplate {
        id: "software",
        title: "Software Engineer",
        title_prefixes: &["Staff", "Senior", "Principal", "Full Stack"],
        taglines: &[
            "Types are a love language.",
            "I write code that writes code.",
            "Compilers fear me, runtimes love me.",
        ],
        icon: "\u{3BB}",
        accent_color: "#00E676",
        bg_gradient: "linear-gradient(135deg, #0a1a0f 0%, #132e1a 100%)",
        stat_labels: ["Backend", "Frontend", "Systems", "Unix Phil."],
        stack_pool: &[],
    },
    LegacyTemplate {
        id: "cloud",
        title: "Cloud Architect",
        title_prefixes: &["Principal", "Senior", "Lead", "Staff"],
        taglines: &[
            "The cloud is just someone else's bare metal.",
            "Distributed by design, resilient by nature.",
            "Multi-cloud native, single-cloud fluent.",
        ],
        icon: "\u{2601}\u{FE0F}",
        accent_color: "#40C4FF",
        bg_gradient: "linear-gradient(135deg, #071825 0%, #0d2b45 100%)",
        stat_labels: ["Design", "Security", "Scale", "Vision"],
        stack_pool: &[
            "AWS", "Cloudflare", "GCP", "Azure", "EKS", "Lambda", "Workers", "Multi-cloud",
            "VPN", "WireGuard", "E2E Encryption", "Serverless", "CDN", "Edge",
        ],
    },
    LegacyTemplate {
        id: "linux",
        title: "Linux Enthusiast",
        title_prefixes: &["Crazy", "Passionate", "Devoted", "Obsessive"],
        taglines: &[
            "btw, I use Linux.",
            "I don't use Linux. Linux uses me.",
            "Have you heard about our lord and savior, Tux?",
        ],
        icon: "\u{1F427}",
        accent_color: "#FFEB3B",
        bg_gradient: "linear-gradient(135deg, #1a1800 0%, #2e2a05 100%)",
        stat_labels: ["Passion", "Shell", "systemd", "Evangelism"],
        stack_pool: &[],
    },
    LegacyTemplate {
        id: "solutions",
        title: "Solutions Engineer",
        title_prefixes: &["Principal", "Senior", "Lead"],
        taglines: &[
            "I translate between humans and machines.",
            "The bridge between what you want and what's possible.",
            "Architecture is a conversation.",
        ],
        icon: "\u{1F309}",
        accent_color: "#FF9800",
        bg_gradient: "linear-gradient(135deg, #1a1005 0%, #2e1f0a 100%)",
        stat_labels: ["Communication", "Problem Solving", "Empathy", "Breadth"],
        stack_pool: &[
            "OpenAPI", "JSON Schema", "REST", "GraphQL", "gRPC", "CQRS", "Event-Driven",
            "Microservices", "Service Mesh",
        ],
    },
    LegacyTemplate {
        id: "sre",
        title: "SRE",
        title_prefixes: &["Principal", "Senior", "Staff", "Lead"],
        taglines: &[
            "Sleep is for the well-monitored.",
            "Uptime is a lifestyle, not a metric.",
            "I break things professionally, so production doesn't.",
        ],
        icon: "\u{1F4DF}",
        accent_color: "#FF5252",
        bg_gradient: "linear-gradient(135deg, #1a0505 0%, #2e0f0f 100%)",
        stat_labels: ["Reliability", "Incident Mgmt", "Observability", "Automation"],
        stack_pool: &[
            "Grafana", "Prometheus", "VictoriaMetrics", "Jaeger", "ELK", "Datadog", "PagerDuty",
            "Chaos Engineering",
        ],
    },
    LegacyTemplate {
        id: "tinkerer",
        title: "Chronic Tinkerer",
        title_prefixes: &[""],
        taglines: &[
            "What if I just tried one more thing...",
            "My side projects have side projects.",
            "Focus score: 42.",
        ],
        icon: "\u{1F527}",
        accent_color: "#FFD54F",
        bg_gradient: "linear-gradient(135deg, #1a1508 0%, #2e2510 100%)",
        stat_labels: ["Curiosity", "Side Projects", "Focus", "Ambition"],
        stack_pool: &[],
    },
    LegacyTemplate {
        id: "hacker",
        title: "Old School Hacker",
        title_prefixes: &[""],
        taglines: &[
            "The terminal is home.",
            "Learned by breaking things. Still does.",
            "Pre-cloud, pre-container, pre-everything.",
        ],
        icon: ">_",
        accent_color: "#00FF41",
        bg_gradient: "linear-gradient(135deg, #000000 0%, #0a0a0a 100%)",
        stat_labels: ["Grit", "Nostalgia", "Root Access", "Lore"],
        stack_pool: &[
            "Bare Metal", "The Terminal", "Shell", "Neovim", "vim", "Helix", "tmux", "Zellij",
            "Ghostty",
        ],
    },
    LegacyTemplate {
        id: "dad",
        title: "Dad",
        title_prefixes: &[""],
        taglines: &[
            "My greatest production deployment.",
            "Works on weekends, deploys on weeknights.",
            "sudo parent --patience=infinite",
        ],
        icon: "\u{1F468}\u{200D}\u{1F467}",
        accent_color: "#F48FB1",
        bg_gradient: "linear-gradient(135deg, #1a0f15 0%, #2e1a28 100%)",
        stat_labels: ["Patience", "Dad Jokes", "Snack Logistics", "Bedtime Stories"],
        stack_pool: &[
            "Diaper Deployment", "Lullaby API", "Snack Queue", "Timeout Orchestrator",
            "Nap Scheduler",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn every_template_has_copy() {
        for t in TEMPLATES {
            assert!(!t.taglines.is_empty(), "{}", t.id);
            assert!(!t.title_prefixes.is_empty(), "{}", t.id);
            assert!(crate::taxonomy::parse_hex_color(t.accent_color).is_some(), "{}", t.id);
        }
    }
}
