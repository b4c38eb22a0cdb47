//! Web architecture and protocols.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["frontend", "front-end", "ui", "ux", "responsive-design", "css", "html"],
        keywords: &["frontend", "front-end", "user interface", "responsive"],
        stack_pool: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        ..seed("frontend", "Frontend Dev", "\u{1F3A8}", "#E91E63")
    },
    CategorySeed {
        topics: &["backend", "back-end", "server-side", "rest-api", "microservice"],
        keywords: &["backend", "back-end", "server-side", "rest api"],
        stack_pool: &["REST", "API", "Databases", "Auth"],
        ..seed("backend", "Backend Dev", "\u{2699}\u{FE0F}", "#3F51B5")
    },
    CategorySeed {
        topics: &["fullstack", "full-stack", "full-stack-developer"],
        keywords: &["full stack", "fullstack"],
        stack_pool: &["Frontend", "Backend", "Database", "DevOps"],
        ..seed("fullstack", "Full Stack Dev", "\u{1F310}", "#9C27B0")
    },
    CategorySeed {
        topics: &["api-design", "openapi", "swagger", "rest", "json-schema", "api-gateway"],
        keywords: &["api design", "openapi", "swagger", "json schema"],
        stack_pool: &["OpenAPI", "Swagger", "JSON Schema", "REST"],
        ..seed("api-design", "API Designer", "\u{1F4D0}", "#FF9800")
    },
    CategorySeed {
        topics: &["graphql", "apollo", "relay", "hasura", "graphql-api"],
        keywords: &["graphql", "apollo", "relay", "hasura"],
        stack_pool: &["GraphQL", "Apollo", "Relay", "Hasura"],
        ..seed("graphql", "GraphQL Dev", "\u{25C6}", "#E10098")
    },
    CategorySeed {
        topics: &["grpc", "protobuf", "protocol-buffers", "grpc-web"],
        keywords: &["grpc", "protobuf", "protocol buffers"],
        stack_pool: &["gRPC", "Protobuf", "Connect", "Buf"],
        ..seed("grpc", "gRPC Dev", "\u{1F4E1}", "#244C5A")
    },
    CategorySeed {
        topics: &["websocket", "websockets", "socket-io", "realtime", "sse"],
        keywords: &["websocket", "real-time", "socket.io"],
        stack_pool: &["WebSockets", "Socket.io", "SSE", "MQTT"],
        ..seed("websockets", "WebSocket Dev", "\u{1F50C}", "#4CAF50")
    },
    CategorySeed {
        topics: &["pwa", "progressive-web-app", "service-worker", "web-push"],
        keywords: &["pwa", "progressive web app", "service worker"],
        stack_pool: &["PWA", "Service Workers", "Web Push", "Workbox"],
        ..seed("pwa", "PWA Dev", "\u{1F4F1}", "#5A0FC8")
    },
    CategorySeed {
        topics: &["ssg", "static-site-generator", "jamstack", "11ty", "hugo", "zola", "jekyll"],
        keywords: &["static site", "ssg", "jamstack"],
        stack_pool: &["Hugo", "Zola", "11ty", "Jekyll"],
        ..seed("ssg", "Static Site Builder", "\u{1F4C4}", "#FF5722")
    },
    CategorySeed {
        topics: &["jamstack", "headless-cms", "static-first"],
        keywords: &["jamstack", "headless cms"],
        stack_pool: &["Jamstack", "Headless CMS", "CDN", "API"],
        ..seed("jamstack", "Jamstack Dev", "\u{26A1}", "#F0047F")
    },
    CategorySeed {
        topics: &["web-components", "custom-elements", "shadow-dom", "lit", "stencil"],
        keywords: &["web component", "custom element", "shadow dom", "lit"],
        stack_pool: &["Lit", "Stencil", "Custom Elements", "Shadow DOM"],
        ..seed("web-components", "Web Components Dev", "\u{1F9E9}", "#29ABE2")
    },
    CategorySeed {
        topics: &["web-standards", "w3c", "whatwg", "web-platform", "html5", "css3"],
        keywords: &["web standard", "w3c", "whatwg", "web platform"],
        stack_pool: &["HTML5", "CSS3", "Web APIs", "WHATWG"],
        ..seed("web-standards", "Web Standards Advocate", "\u{1F310}", "#005A9C")
    },
];
