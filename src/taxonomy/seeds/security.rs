//! Security disciplines.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["penetration-testing", "pentesting", "pentest", "ethical-hacking", "bug-bounty"],
        keywords: &["penetration testing", "pentest", "ethical hacking", "bug bounty"],
        stack_pool: &["Burp Suite", "Metasploit", "Nmap", "OWASP"],
        ..seed("pentesting", "Pentester", "\u{1F575}\u{FE0F}", "#FF0000")
    },
    CategorySeed {
        topics: &["cryptography", "encryption", "tls", "ssl", "pgp", "e2ee"],
        keywords: &["cryptography", "encryption", "tls", "end-to-end"],
        stack_pool: &["TLS", "PGP", "AES", "RSA", "Curve25519"],
        ..seed("cryptography", "Cryptographer", "\u{1F510}", "#FFD700")
    },
    CategorySeed {
        topics: &["oauth", "sso", "openid-connect", "saml", "authentication", "authorization", "oidc"],
        keywords: &["oauth", "sso", "authentication", "authorization", "openid"],
        stack_pool: &["OAuth 2.0", "OIDC", "SAML", "JWT", "Passkeys"],
        ..seed("oauth-sso", "Auth Engineer", "\u{1F511}", "#4CAF50")
    },
    CategorySeed {
        topics: &["zero-trust", "zero-trust-security", "beyondcorp", "identity-aware-proxy"],
        keywords: &["zero trust", "beyondcorp", "identity-aware"],
        stack_pool: &["Zero Trust", "mTLS", "SPIFFE", "Tailscale"],
        ..seed("zero-trust", "Zero Trust Engineer", "\u{1F6E1}\u{FE0F}", "#1565C0")
    },
    CategorySeed {
        topics: &["supply-chain-security", "sbom", "sigstore", "software-supply-chain", "slsa"],
        keywords: &["supply chain", "sbom", "sigstore", "slsa"],
        stack_pool: &["SBOM", "Sigstore", "SLSA", "Cosign"],
        ..seed("supply-chain-security", "Supply Chain Security", "\u{1F517}", "#FF6D00")
    },
    CategorySeed {
        topics: &["ctf", "capture-the-flag", "wargame", "cybersecurity-challenges"],
        keywords: &["ctf", "capture the flag", "wargame"],
        stack_pool: &["CTF", "pwn", "crypto", "forensics", "rev"],
        ..seed("ctf", "CTF Player", "\u{1F3F4}", "#9C27B0")
    },
    CategorySeed {
        topics: &["network-security", "firewall", "ids", "ips", "nids"],
        keywords: &["network security", "firewall", "intrusion detection"],
        stack_pool: &["Firewall", "IDS/IPS", "Wireshark", "Suricata"],
        ..seed("network-security", "Network Security", "\u{1F310}", "#00BCD4")
    },
    CategorySeed {
        topics: &["vulnerability", "cve", "exploit", "security-research", "fuzzing"],
        keywords: &["vulnerability", "cve", "exploit", "security research"],
        stack_pool: &["CVE", "AFL", "Fuzzing", "Ghidra"],
        ..seed("vulnerability-research", "Vuln Researcher", "\u{1F41B}", "#F44336")
    },
    CategorySeed {
        topics: &["malware", "malware-analysis", "reverse-engineering", "threat-intelligence"],
        keywords: &["malware", "reverse engineering", "threat intelligence"],
        stack_pool: &["Ghidra", "IDA", "YARA", "Cuckoo"],
        ..seed("malware-analysis", "Malware Analyst", "\u{1F9EA}", "#880E4F")
    },
    CategorySeed {
        topics: &["devsecops", "security-automation", "sast", "dast", "container-security"],
        keywords: &["devsecops", "security automation", "sast", "dast"],
        stack_pool: &["Trivy", "Snyk", "SonarQube", "OWASP ZAP"],
        ..seed("devsecops", "DevSecOps Engineer", "\u{1F6E1}\u{FE0F}", "#7CB342")
    },
];
