//! Industry verticals.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["fintech", "payments", "banking", "stripe", "crypto", "defi"],
        keywords: &["fintech", "payments", "banking", "financial"],
        stack_pool: &["Stripe", "Plaid", "Ledger", "Compliance"],
        ..seed("fintech", "Fintech Dev", "\u{1F4B0}", "#00C853")
    },
    CategorySeed {
        topics: &["healthtech", "health", "medical", "fhir", "hl7", "healthcare"],
        keywords: &["healthtech", "healthcare", "medical", "fhir"],
        stack_pool: &["FHIR", "HL7", "HIPAA", "EHR"],
        ..seed("healthtech", "Healthtech Dev", "\u{1F3E5}", "#E53935")
    },
    CategorySeed {
        topics: &["ecommerce", "e-commerce", "shopify", "stripe", "commerce"],
        keywords: &["ecommerce", "e-commerce", "shopify"],
        stack_pool: &["Shopify", "Stripe", "Medusa", "Saleor"],
        ..seed("ecommerce", "E-commerce Dev", "\u{1F6D2}", "#FF6F00")
    },
    CategorySeed {
        topics: &["saas", "software-as-a-service", "multi-tenant", "subscription"],
        keywords: &["saas", "multi-tenant", "subscription"],
        stack_pool: &["SaaS", "Multi-tenant", "Billing", "Auth"],
        ..seed("saas", "SaaS Builder", "\u{1F4BB}", "#1565C0")
    },
    CategorySeed {
        topics: &["web3", "blockchain", "ethereum", "solidity", "smart-contracts", "defi", "nft"],
        keywords: &["web3", "blockchain", "ethereum", "smart contract"],
        stack_pool: &["Ethereum", "Solidity", "Hardhat", "IPFS"],
        ..seed("web3", "Web3 Dev", "\u{26D3}\u{FE0F}", "#F7931A")
    },
    CategorySeed {
        topics: &["gaming", "game-development", "indie-game", "multiplayer"],
        keywords: &["game development", "indie game", "multiplayer"],
        stack_pool: &["Game Dev", "Multiplayer", "Netcode", "ECS"],
        ..seed("gaming-industry", "Gaming Industry Dev", "\u{1F3AE}", "#9C27B0")
    },
    CategorySeed {
        topics: &["media", "streaming", "video", "audio", "ffmpeg", "transcoding"],
        keywords: &["media tech", "streaming", "video", "audio", "transcoding"],
        stack_pool: &["FFmpeg", "HLS", "WebRTC", "Mux"],
        ..seed("media-tech", "Media Tech Dev", "\u{1F3AC}", "#FF4081")
    },
    CategorySeed {
        topics: &["govtech", "government", "civic-tech", "open-data", "e-government"],
        keywords: &["govtech", "government", "civic tech", "open data"],
        stack_pool: &["Open Data", "CKAN", "GDS", "Accessibility"],
        ..seed("govtech", "GovTech Dev", "\u{1F3DB}\u{FE0F}", "#37474F")
    },
];
