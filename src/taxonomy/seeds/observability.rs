//! Monitoring, logging, tracing and incident work.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["monitoring", "grafana", "prometheus", "victoriametrics", "datadog"],
        keywords: &["monitoring", "grafana", "prometheus", "metrics"],
        stack_pool: &["Grafana", "Prometheus", "VictoriaMetrics", "Datadog"],
        ..seed("monitoring", "Monitoring Expert", "\u{1F4CA}", "#FF5252")
    },
    CategorySeed {
        topics: &["logging", "elk", "elasticsearch", "logstash", "loki", "fluentd"],
        keywords: &["logging", "elasticsearch", "log aggregat"],
        stack_pool: &["Loki", "ELK", "Fluentd", "Vector"],
        ..seed("logging", "Logging Expert", "\u{1F4D3}", "#FFC107")
    },
    CategorySeed {
        topics: &["tracing", "distributed-tracing", "jaeger", "zipkin", "tempo"],
        keywords: &["distributed tracing", "jaeger", "zipkin"],
        stack_pool: &["Jaeger", "Tempo", "Zipkin", "Spans"],
        ..seed("tracing", "Tracing Expert", "\u{1F50D}", "#7C4DFF")
    },
    CategorySeed {
        topics: &["opentelemetry", "otel", "telemetry"],
        keywords: &["opentelemetry", "otel", "telemetry"],
        stack_pool: &["OpenTelemetry", "OTLP", "Collectors", "SDKs"],
        ..seed("opentelemetry", "OpenTelemetry Dev", "\u{1F4E1}", "#425CC7")
    },
    CategorySeed {
        topics: &["chaos-engineering", "chaos-monkey", "litmus", "chaos-mesh"],
        keywords: &["chaos engineering", "chaos monkey", "resilience"],
        stack_pool: &["Litmus", "Chaos Mesh", "Gremlin", "Toxiproxy"],
        ..seed("chaos-engineering", "Chaos Engineer", "\u{1F525}", "#D50000")
    },
    CategorySeed {
        topics: &["incident-response", "on-call", "pagerduty", "opsgenie", "incident-management"],
        keywords: &["incident response", "on-call", "pagerduty"],
        stack_pool: &["PagerDuty", "OpsGenie", "Runbooks", "Postmortems"],
        ..seed("incident-response", "Incident Responder", "\u{1F6A8}", "#FF6D00")
    },
    CategorySeed {
        topics: &["slo", "sli", "error-budget", "reliability"],
        keywords: &["slo", "sli", "error budget", "reliability"],
        stack_pool: &["SLOs", "SLIs", "Error Budgets", "Nobl9"],
        ..seed("slo-sli", "SLO/SLI Expert", "\u{1F3AF}", "#00C853")
    },
    CategorySeed {
        topics: &["alerting", "alertmanager", "notification", "alert-rules"],
        keywords: &["alerting", "alertmanager", "notification"],
        stack_pool: &["Alertmanager", "Grafana Alerts", "PagerDuty"],
        ..seed("alerting", "Alerting Expert", "\u{1F514}", "#FF1744")
    },
];
