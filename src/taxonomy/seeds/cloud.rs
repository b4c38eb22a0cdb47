//! Cloud providers and hosting platforms.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["aws", "amazon-web-services", "lambda", "s3", "ec2", "eks", "dynamodb", "cloudformation"],
        keywords: &["aws", "amazon web services", "lambda", "s3"],
        stack_pool: &["AWS", "Lambda", "S3", "EC2", "EKS", "CDK"],
        ..seed("aws", "AWS Expert", "\u{2601}\u{FE0F}", "#FF9900")
    },
    CategorySeed {
        topics: &["gcp", "google-cloud", "cloud-run", "bigquery", "gke"],
        keywords: &["google cloud", "gcp", "bigquery"],
        stack_pool: &["GCP", "Cloud Run", "BigQuery", "GKE"],
        ..seed("gcp", "GCP Expert", "\u{2601}\u{FE0F}", "#4285F4")
    },
    CategorySeed {
        topics: &["azure", "microsoft-azure", "azure-functions", "aks"],
        keywords: &["azure", "microsoft cloud"],
        stack_pool: &["Azure", "Functions", "AKS", "CosmosDB"],
        ..seed("azure", "Azure Expert", "\u{2601}\u{FE0F}", "#0078D4")
    },
    CategorySeed {
        topics: &["cloudflare", "cloudflare-workers", "workers", "pages", "r2", "d1", "wrangler"],
        keywords: &["cloudflare", "workers", "edge"],
        stack_pool: &["Workers", "D1", "R2", "KV", "Durable Objects", "Wrangler"],
        taglines: Some(&[
            "Edge-first everything.",
            "The network is the computer.",
            "Cloudflare all the things.",
        ]),
        ..seed("cloudflare", "Cloudflare Dev", "\u{1F7E0}", "#F38020")
    },
    CategorySeed {
        topics: &["vercel", "now", "edge-functions"],
        keywords: &["vercel", "edge function"],
        stack_pool: &["Vercel", "Edge Functions", "Next.js"],
        ..seed("vercel", "Vercel Dev", "\u{25B2}", "#000000")
    },
    CategorySeed {
        topics: &["netlify", "netlify-functions", "netlify-cms"],
        keywords: &["netlify"],
        stack_pool: &["Netlify", "Functions", "Forms"],
        ..seed("netlify", "Netlify Dev", "\u{1F310}", "#00C7B7")
    },
    CategorySeed {
        topics: &["fly-io", "flyio", "fly", "machines-api"],
        keywords: &["fly.io", "fly deploy"],
        stack_pool: &["Fly.io", "Machines", "Volumes", "Litefs"],
        ..seed("fly-io", "Fly.io Dev", "\u{2708}\u{FE0F}", "#7B3FF2")
    },
    CategorySeed {
        topics: &["supabase", "supabase-js", "realtime"],
        keywords: &["supabase", "firebase alternative"],
        stack_pool: &["Supabase", "PostgreSQL", "Auth", "Realtime"],
        ..seed("supabase", "Supabase Dev", "\u{26A1}", "#3ECF8E")
    },
    CategorySeed {
        topics: &["firebase", "firestore", "firebase-auth", "firebase-functions"],
        keywords: &["firebase", "firestore"],
        stack_pool: &["Firebase", "Firestore", "Auth", "Cloud Functions"],
        ..seed("firebase", "Firebase Dev", "\u{1F525}", "#FFCA28")
    },
    CategorySeed {
        topics: &["digitalocean", "droplets", "kubernetes-digitalocean"],
        keywords: &["digitalocean", "droplet"],
        stack_pool: &["DigitalOcean", "Droplets", "Spaces", "App Platform"],
        ..seed("digitalocean", "DigitalOcean Dev", "\u{1F30A}", "#0080FF")
    },
];
