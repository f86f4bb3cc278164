//! Neo4j schema initialization - constraints and indexes.

use neo4rs::{query, Graph};

const STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT region_id_unique IF NOT EXISTS
     FOR (r:Region) REQUIRE r.id IS UNIQUE",
    "CREATE CONSTRAINT slider_id_unique IF NOT EXISTS
     FOR (s:Slider) REQUIRE s.id IS UNIQUE",
    "CREATE CONSTRAINT content_id_unique IF NOT EXISTS
     FOR (c:Content) REQUIRE c.id IS UNIQUE",
    "CREATE CONSTRAINT feedback_id_unique IF NOT EXISTS
     FOR (f:Feedback) REQUIRE f.id IS UNIQUE",
    // Keeps the mutation lock a singleton under concurrent MERGE.
    "CREATE CONSTRAINT region_lock_key_unique IF NOT EXISTS
     FOR (l:RegionLock) REQUIRE l.key IS UNIQUE",
    "CREATE INDEX region_is_active IF NOT EXISTS
     FOR (r:Region) ON (r.is_active)",
    "CREATE POINT INDEX region_bbox_sw IF NOT EXISTS
     FOR (r:Region) ON (r.bbox_sw)",
    "CREATE POINT INDEX region_bbox_ne IF NOT EXISTS
     FOR (r:Region) ON (r.bbox_ne)",
];

/// Initialize Neo4j schema with required constraints and indexes.
///
/// This should be called once on startup. Every statement uses
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    for statement in STATEMENTS {
        graph.run(query(statement)).await?;
    }

    tracing::info!("Neo4j schema initialized (constraints and indexes ensured)");
    Ok(())
}
