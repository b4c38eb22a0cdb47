//! Data engineering and analytics.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["data-engineering", "data-pipeline", "etl", "data-warehouse", "data-lake"],
        keywords: &["data engineering", "data pipeline", "etl"],
        stack_pool: &["Spark", "Airflow", "dbt", "Kafka"],
        ..seed("data-engineering", "Data Engineer", "\u{1F4CA}", "#FF7043")
    },
    CategorySeed {
        topics: &["etl", "data-integration", "data-loading", "airbyte", "fivetran"],
        keywords: &["etl", "data integration", "data loading"],
        stack_pool: &["Airbyte", "Fivetran", "dbt", "Singer"],
        ..seed("etl", "ETL Dev", "\u{1F504}", "#5C6BC0")
    },
    CategorySeed {
        topics: &["data-visualization", "d3", "chart", "dashboard", "plotting", "d3js"],
        keywords: &["data visualization", "d3", "chart", "dashboard"],
        stack_pool: &["D3.js", "Observable", "Vega", "Plotly"],
        ..seed("data-viz", "Data Visualization Dev", "\u{1F4C8}", "#FF4081")
    },
    CategorySeed {
        topics: &["stream-processing", "kafka", "flink", "pulsar", "event-streaming"],
        keywords: &["stream processing", "kafka", "event streaming"],
        stack_pool: &["Kafka", "Flink", "Pulsar", "NATS"],
        ..seed("stream-processing", "Stream Processing Dev", "\u{1F30A}", "#00897B")
    },
    CategorySeed {
        topics: &["data-lake", "delta-lake", "iceberg", "hudi", "lakehouse"],
        keywords: &["data lake", "delta lake", "iceberg", "lakehouse"],
        stack_pool: &["Delta Lake", "Iceberg", "Hudi", "Parquet"],
        ..seed("data-lakes", "Data Lake Engineer", "\u{1F3DE}\u{FE0F}", "#0277BD")
    },
    CategorySeed {
        topics: &["analytics", "business-intelligence", "bi", "metabase", "superset"],
        keywords: &["analytics", "business intelligence"],
        stack_pool: &["dbt", "Metabase", "Superset", "Looker"],
        ..seed("analytics", "Analytics Engineer", "\u{1F4CA}", "#7B1FA2")
    },
    CategorySeed {
        topics: &["sql", "sql-tools", "database-gui", "query-builder"],
        keywords: &["sql tool", "database gui", "query builder"],
        stack_pool: &["SQL", "pgAdmin", "DBeaver", "DataGrip"],
        ..seed("sql-tooling", "SQL Tooling Dev", "\u{1F4BE}", "#336791")
    },
    CategorySeed {
        topics: &["data-pipeline", "airflow", "dagster", "prefect", "workflow"],
        keywords: &["data pipeline", "airflow", "dagster", "prefect"],
        stack_pool: &["Airflow", "Dagster", "Prefect", "Luigi"],
        ..seed("data-pipelines", "Pipeline Builder", "\u{1F6E0}\u{FE0F}", "#E65100")
    },
];
