//! Databases, storage engines and ORMs.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["postgresql", "postgres", "psql", "postgis", "pg"],
        keywords: &["postgresql", "postgres", "psql"],
        stack_pool: &["PostgreSQL", "PostGIS", "pgvector", "pg_dump"],
        ..seed("postgresql", "PostgreSQL Expert", "\u{1F418}", "#4169E1")
    },
    CategorySeed {
        topics: &["mysql", "mariadb", "percona"],
        keywords: &["mysql", "mariadb"],
        stack_pool: &["MySQL", "MariaDB", "Percona"],
        ..seed("mysql", "MySQL Dev", "\u{1F42C}", "#4479A1")
    },
    CategorySeed {
        topics: &["sqlite", "sqlite3", "libsql", "litestream"],
        keywords: &["sqlite", "embedded database"],
        stack_pool: &["SQLite", "libSQL", "Litestream", "better-sqlite3"],
        ..seed("sqlite", "SQLite Dev", "\u{1F4BE}", "#003B57")
    },
    CategorySeed {
        topics: &["mongodb", "mongoose", "nosql", "bson"],
        keywords: &["mongodb", "nosql", "document database"],
        stack_pool: &["MongoDB", "Mongoose", "Atlas", "Aggregation"],
        ..seed("mongodb", "MongoDB Dev", "\u{1F343}", "#47A248")
    },
    CategorySeed {
        topics: &["redis", "redis-cluster", "valkey", "keydb"],
        keywords: &["redis", "in-memory", "cache"],
        stack_pool: &["Redis", "Valkey", "Pub/Sub", "Streams"],
        ..seed("redis", "Redis Expert", "\u{1F534}", "#DC382D")
    },
    CategorySeed {
        topics: &["duckdb", "olap", "analytical-database"],
        keywords: &["duckdb", "olap", "analytical"],
        stack_pool: &["DuckDB", "Parquet", "Arrow", "SQL"],
        taglines: Some(&[
            "Analytics at the speed of quack.",
            "In-process OLAP.",
            "SQL for the modern age.",
        ]),
        ..seed("duckdb", "DuckDB Dev", "\u{1F986}", "#FFF000")
    },
    CategorySeed {
        topics: &["clickhouse", "olap", "columnar-database"],
        keywords: &["clickhouse", "columnar", "analytics"],
        stack_pool: &["ClickHouse", "MergeTree", "Materialized Views"],
        ..seed("clickhouse", "ClickHouse Dev", "\u{26A1}", "#FFCC00")
    },
    CategorySeed {
        topics: &["neo4j", "graph-database", "cypher", "knowledge-graph"],
        keywords: &["neo4j", "graph database", "cypher"],
        stack_pool: &["Neo4j", "Cypher", "Graph", "Knowledge Graph"],
        ..seed("neo4j", "Neo4j Dev", "\u{1F578}\u{FE0F}", "#008CC1")
    },
    CategorySeed {
        topics: &["surrealdb", "surreal", "multi-model-database"],
        keywords: &["surrealdb", "surreal"],
        stack_pool: &["SurrealDB", "SurrealQL", "Multi-model"],
        ..seed("surrealdb", "SurrealDB Dev", "\u{1F30C}", "#FF00A0")
    },
    CategorySeed {
        topics: &["turso", "libsql", "edge-database"],
        keywords: &["turso", "libsql", "edge database"],
        stack_pool: &["Turso", "libSQL", "Embedded Replicas"],
        ..seed("turso", "Turso Dev", "\u{1FA90}", "#4FF8D2")
    },
    CategorySeed {
        topics: &["drizzle", "drizzle-orm", "orm"],
        keywords: &["drizzle orm", "type-safe orm"],
        stack_pool: &["Drizzle ORM", "Drizzle Kit", "TypeScript ORM"],
        ..seed("drizzle", "Drizzle ORM Dev", "\u{1F4A7}", "#C5F74F")
    },
    CategorySeed {
        topics: &["prisma", "prisma-orm", "prisma-client"],
        keywords: &["prisma", "prisma orm"],
        stack_pool: &["Prisma", "Prisma Client", "Migrations"],
        ..seed("prisma", "Prisma Dev", "\u{25B3}", "#2D3748")
    },
];
