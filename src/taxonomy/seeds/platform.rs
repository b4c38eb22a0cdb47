//! Platform, CI/CD and infrastructure-as-code tooling.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        languages: &["HCL", "Jsonnet"],
        topics: &["kubernetes", "k8s", "kubectl", "k3s", "k8s-operator", "cncf"],
        keywords: &["kubernetes", "k8s", "container orchestrat"],
        stat_labels: Some(["Orchestration", "Networking", "Storage", "Scaling"]),
        stack_pool: &["Kubernetes", "kubectl", "Helm", "Kustomize", "k3s"],
        ..seed("kubernetes", "Kubernetes Engineer", "\u{2638}\u{FE0F}", "#326CE5")
    },
    CategorySeed {
        topics: &["docker", "dockerfile", "docker-compose", "containers", "oci"],
        keywords: &["docker", "container", "dockerfile"],
        stack_pool: &["Docker", "Compose", "Buildx", "OCI", "Podman"],
        ..seed("docker", "Docker Expert", "\u{1F433}", "#2496ED")
    },
    CategorySeed {
        languages: &["HCL"],
        topics: &["terraform", "opentofu", "hcl", "infrastructure-as-code"],
        keywords: &["terraform", "infrastructure as code", "hcl"],
        stack_pool: &["Terraform", "OpenTofu", "HCL", "Terragrunt"],
        ..seed("terraform", "Terraform Engineer", "\u{1F3D7}\u{FE0F}", "#7B42BC")
    },
    CategorySeed {
        topics: &["ansible", "ansible-playbook", "ansible-role", "configuration-management"],
        keywords: &["ansible", "playbook", "configuration management"],
        stack_pool: &["Ansible", "AWX", "Molecule", "Roles"],
        ..seed("ansible", "Ansible Engineer", "\u{1F4E6}", "#EE0000")
    },
    CategorySeed {
        topics: &["pulumi", "infrastructure-as-code"],
        keywords: &["pulumi", "infrastructure as code"],
        stack_pool: &["Pulumi", "TypeScript IaC", "Go IaC"],
        ..seed("pulumi", "Pulumi Dev", "\u{1F3D7}\u{FE0F}", "#8A3391")
    },
    CategorySeed {
        topics: &["helm", "helm-chart", "helm-charts", "helmfile"],
        keywords: &["helm chart", "helmfile"],
        stack_pool: &["Helm", "Charts", "Helmfile", "Kubernetes"],
        ..seed("helm", "Helm Maintainer", "\u{2693}", "#0F1689")
    },
    CategorySeed {
        topics: &["argocd", "argo-cd", "gitops", "argo-workflows"],
        keywords: &["argocd", "gitops", "argo workflow"],
        stack_pool: &["ArgoCD", "GitOps", "Argo Workflows"],
        ..seed("argocd", "ArgoCD Engineer", "\u{1F500}", "#EF7B4D")
    },
    CategorySeed {
        topics: &["github-actions", "github-action", "ci-cd", "github-ci"],
        keywords: &["github actions", "ci/cd", "workflow automation"],
        stack_pool: &["GitHub Actions", "Workflows", "Runners"],
        ..seed("github-actions", "GitHub Actions Dev", "\u{2699}\u{FE0F}", "#2088FF")
    },
    CategorySeed {
        topics: &["jenkins", "jenkinsfile", "ci-cd"],
        keywords: &["jenkins", "jenkinsfile"],
        stack_pool: &["Jenkins", "Pipelines", "Groovy"],
        ..seed("jenkins", "Jenkins Admin", "\u{1F468}\u{200D}\u{1F527}", "#D24939")
    },
    CategorySeed {
        topics: &["gitlab-ci", "gitlab", "gitlab-runner"],
        keywords: &["gitlab ci", "gitlab runner"],
        stack_pool: &["GitLab CI", "Runners", ".gitlab-ci.yml"],
        ..seed("gitlab-ci", "GitLab CI Dev", "\u{1F98A}", "#FC6D26")
    },
    CategorySeed {
        languages: &["Nix"],
        topics: &["nixos", "nix", "nix-flakes", "nixpkgs", "home-manager"],
        keywords: &["nixos", "nix flake", "nixpkgs", "home-manager"],
        stack_pool: &["NixOS", "Nix Flakes", "Home Manager", "nixpkgs"],
        taglines: Some(&[
            "Reproducible by design.",
            "Declarative everything.",
            "It works on my machine. And yours. And everyone's.",
        ]),
        ..seed("nixos", "NixOS User", "\u{2744}\u{FE0F}", "#5277C3")
    },
    CategorySeed {
        topics: &["nomad", "hashicorp-nomad", "hashicorp"],
        keywords: &["nomad", "hashicorp"],
        stack_pool: &["Nomad", "Consul", "Vault"],
        ..seed("nomad", "Nomad User", "\u{1F3DC}\u{FE0F}", "#00CA8E")
    },
    CategorySeed {
        topics: &["packer", "hashicorp-packer", "machine-image"],
        keywords: &["packer", "machine image"],
        stack_pool: &["Packer", "AMI", "Vagrant"],
        ..seed("packer", "Packer User", "\u{1F4E6}", "#02A8EF")
    },
    CategorySeed {
        topics: &["vagrant", "vagrantfile", "virtualbox"],
        keywords: &["vagrant", "vagrantfile"],
        stack_pool: &["Vagrant", "VirtualBox", "libvirt"],
        ..seed("vagrant", "Vagrant User", "\u{1F4E6}", "#1868F2")
    },
    CategorySeed {
        topics: &["crossplane", "compositions", "cloud-native-iac"],
        keywords: &["crossplane", "cloud-native iac"],
        stack_pool: &["Crossplane", "Compositions", "Providers"],
        ..seed("crossplane", "Crossplane Dev", "\u{1F310}", "#F7B500")
    },
];
