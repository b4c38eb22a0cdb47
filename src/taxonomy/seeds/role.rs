//! Job roles.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["frontend", "front-end", "ui-development", "css", "responsive"],
        keywords: &["frontend engineer", "ui developer", "front-end"],
        stack_pool: &["HTML", "CSS", "JS", "Frameworks", "Design Systems"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("frontend-engineer", "Frontend Engineer", "\u{1F3A8}", "#E91E63")
    },
    CategorySeed {
        topics: &["backend", "server-side", "api", "microservices"],
        keywords: &["backend engineer", "server-side", "api developer"],
        stack_pool: &["APIs", "Databases", "Auth", "Queues"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("backend-engineer", "Backend Engineer", "\u{2699}\u{FE0F}", "#3F51B5")
    },
    CategorySeed {
        topics: &["devops", "ci-cd", "infrastructure", "automation", "gitops"],
        keywords: &["devops", "ci/cd", "infrastructure", "automation"],
        stack_pool: &["CI/CD", "Docker", "K8s", "Terraform", "Ansible"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("devops-engineer", "DevOps Engineer", "\u{1F504}", "#FF9800")
    },
    CategorySeed {
        topics: &["sre", "reliability", "uptime", "incident", "on-call", "observability"],
        keywords: &["sre", "site reliability", "uptime", "incident"],
        stack_pool: &["SLOs", "Monitoring", "Incident Response", "Chaos"],
        taglines: Some(&[
            "Sleep is for the well-monitored.",
            "Uptime is a lifestyle.",
            "I break things so production doesn't.",
        ]),
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("sre", "Site Reliability Engineer", "\u{1F4DF}", "#FF5252")
    },
    CategorySeed {
        topics: &["platform-engineering", "internal-developer-platform", "developer-experience", "dx"],
        keywords: &["platform engineer", "developer experience", "internal platform"],
        stack_pool: &["IDP", "Backstage", "Port", "Kubernetes"],
        taglines: Some(&[
            "Your deploy pipeline is my canvas.",
            "I automate the automators.",
            "DX is my north star.",
        ]),
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("platform-engineer", "Platform Engineer", "\u{1F517}", "#7C4DFF")
    },
    CategorySeed {
        topics: &["security", "appsec", "infosec", "security-engineering"],
        keywords: &["security engineer", "appsec", "infosec"],
        stack_pool: &["SAST", "DAST", "WAF", "IAM", "Zero Trust"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("security-engineer", "Security Engineer", "\u{1F6E1}\u{FE0F}", "#F44336")
    },
    CategorySeed {
        topics: &["data-engineering", "data-pipeline", "big-data"],
        keywords: &["data engineer", "data pipeline", "big data"],
        stack_pool: &["Spark", "Airflow", "dbt", "Kafka", "Flink"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("data-engineer", "Data Engineer", "\u{1F4CA}", "#FF7043")
    },
    CategorySeed {
        topics: &["machine-learning", "ml-engineering", "deep-learning", "model-training"],
        keywords: &["ml engineer", "machine learning", "deep learning"],
        stack_pool: &["PyTorch", "TensorFlow", "MLflow", "Kubeflow"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("ml-engineer", "ML Engineer", "\u{1F9E0}", "#8B5CF6")
    },
    CategorySeed {
        topics: &["architecture", "system-design", "design-patterns", "microservices", "ddd"],
        keywords: &["solutions architect", "system design", "architecture"],
        stack_pool: &["Architecture", "Design Patterns", "DDD", "CQRS"],
        taglines: Some(&[
            "Architecture is a conversation.",
            "I translate between humans and machines.",
            "The bridge between what you want and what's possible.",
        ]),
        title_prefixes: Some(&["Principal", "Senior", "Lead"]),
        ..seed("solutions-architect", "Solutions Architect", "\u{1F3D7}\u{FE0F}", "#FF9800")
    },
    CategorySeed {
        topics: &["cloud-architecture", "multi-cloud", "cloud-native", "hybrid-cloud"],
        keywords: &["cloud architect", "multi-cloud", "cloud-native"],
        stack_pool: &["Multi-cloud", "Cloud Native", "Well-Architected", "Landing Zones"],
        taglines: Some(&[
            "The cloud is just someone else's bare metal.",
            "Distributed by design.",
            "Multi-cloud native.",
        ]),
        title_prefixes: Some(&["Principal", "Senior", "Lead"]),
        ..seed("cloud-architect", "Cloud Architect", "\u{2601}\u{FE0F}", "#40C4FF")
    },
    CategorySeed {
        languages: &["C", "C++", "Rust", "Zig"],
        topics: &["systems-programming", "low-level", "performance"],
        keywords: &["systems programming", "low-level", "close to the metal"],
        stack_pool: &["C", "Rust", "Zig", "Assembly", "POSIX"],
        taglines: Some(&[
            "Closer to the metal than your bootloader.",
            "I speak fluent syscall.",
            "The kernel whisperer.",
        ]),
        title_prefixes: Some(&["Principal", "Staff", "Senior"]),
        ..seed("systems-programmer", "Systems Programmer", "\u{2699}\u{FE0F}", "#4A90D9")
    },
    CategorySeed {
        topics: &["mobile", "ios", "android", "react-native", "flutter", "mobile-development"],
        keywords: &["mobile developer", "ios", "android", "react native"],
        stack_pool: &["iOS", "Android", "Flutter", "React Native"],
        title_prefixes: Some(&["Senior", "Staff", "Principal", "Lead"]),
        ..seed("mobile-developer", "Mobile Developer", "\u{1F4F1}", "#02569B")
    },
    CategorySeed {
        topics: &["open-source", "oss", "maintainer", "contributor", "hacktoberfest"],
        keywords: &["open source", "maintainer", "contributor"],
        stack_pool: &["GitHub", "Issues", "PRs", "Releases", "CI/CD"],
        taglines: Some(&[
            "Merge or close, there is no maybe.",
            "Issues are my inbox.",
            "Open source is a lifestyle.",
        ]),
        title_prefixes: Some(&[""]),
        ..seed("open-source-maintainer", "Open Source Maintainer", "\u{1F4E6}", "#2196F3")
    },
    CategorySeed {
        topics: &["documentation", "technical-writing", "docs", "readme", "docusaurus", "mdx"],
        keywords: &["technical writ", "documentation", "docs", "readme"],
        stack_pool: &["Docusaurus", "MDX", "VitePress", "Mintlify"],
        title_prefixes: Some(&["Senior", "Staff", "Principal"]),
        ..seed("technical-writer", "Technical Writer", "\u{270D}\u{FE0F}", "#795548")
    },
    CategorySeed {
        topics: &["developer-relations", "devrel", "developer-experience", "developer-advocacy"],
        keywords: &["developer advocate", "devrel", "developer relations"],
        stack_pool: &["Talks", "Blogs", "Demos", "Community"],
        title_prefixes: Some(&["Senior", "Staff", "Principal"]),
        ..seed("developer-advocate", "Developer Advocate", "\u{1F4E3}", "#00BCD4")
    },
];
