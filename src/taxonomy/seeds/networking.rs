//! Networking.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["vpn", "wireguard", "openvpn", "tailscale", "headscale"],
        keywords: &["vpn", "wireguard", "tailscale", "tunnel"],
        stack_pool: &["WireGuard", "Tailscale", "Headscale", "OpenVPN"],
        ..seed("vpn-wireguard", "VPN / WireGuard Dev", "\u{1F510}", "#88171A")
    },
    CategorySeed {
        topics: &["dns", "dnsmasq", "coredns", "bind", "pihole"],
        keywords: &["dns", "nameserver", "domain name"],
        stack_pool: &["CoreDNS", "Pi-hole", "BIND", "dnsmasq"],
        ..seed("dns", "DNS Expert", "\u{1F310}", "#4FC3F7")
    },
    CategorySeed {
        topics: &["load-balancer", "nginx", "haproxy", "envoy", "traefik", "caddy"],
        keywords: &["load balanc", "nginx", "haproxy", "envoy", "traefik"],
        stack_pool: &["Nginx", "HAProxy", "Envoy", "Traefik", "Caddy"],
        ..seed("load-balancing", "Load Balancer Dev", "\u{2696}\u{FE0F}", "#7CB342")
    },
    CategorySeed {
        topics: &["service-mesh", "istio", "linkerd", "cilium", "consul-connect"],
        keywords: &["service mesh", "istio", "linkerd"],
        stack_pool: &["Istio", "Linkerd", "Cilium", "Consul"],
        ..seed("service-mesh", "Service Mesh Dev", "\u{1F578}\u{FE0F}", "#00ACC1")
    },
    CategorySeed {
        topics: &["cdn", "edge-computing", "caching", "cache-invalidation"],
        keywords: &["cdn", "content delivery", "edge caching"],
        stack_pool: &["Cloudflare", "Fastly", "Akamai", "KeyCDN"],
        ..seed("cdn", "CDN Expert", "\u{1F30D}", "#FF8F00")
    },
    CategorySeed {
        topics: &["http", "http2", "http3", "quic", "hpack"],
        keywords: &["http/2", "http/3", "quic", "http protocol"],
        stack_pool: &["HTTP/3", "QUIC", "h2", "HPACK"],
        ..seed("http-protocols", "HTTP Protocol Dev", "\u{1F310}", "#1565C0")
    },
];
