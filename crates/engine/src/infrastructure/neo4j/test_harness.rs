//! Throwaway Neo4j for adapter tests.
//!
//! Each harness owns one container; dropping it stops the database.

use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};

type HarnessResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const IMAGE: &str = "neo4j";
const IMAGE_TAG: &str = "5.26.0-community";
const BOLT_PORT: u16 = 7687;
const USER: &str = "neo4j";
const PASSWORD: &str = "geoward-test";

const CONNECT_ATTEMPTS: u32 = 30;
const FIRST_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(5);

pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Boot a container and apply the region schema.
    pub async fn start() -> HarnessResult<Self> {
        let container = image().start().await;
        let port = container.get_host_port_ipv4(BOLT_PORT).await;

        let graph = connect(&format!("bolt://127.0.0.1:{port}")).await?;
        super::ensure_schema(&graph).await?;

        Ok(Self {
            _container: container,
            graph,
        })
    }

    pub fn graph(&self) -> Graph {
        self.graph.clone()
    }

    /// Drop every node. Constraints and indexes survive.
    pub async fn clean(&self) -> HarnessResult<()> {
        self.graph
            .run(query("MATCH (n) DETACH DELETE n"))
            .await
            .map_err(|e| format!("wiping test database: {e}"))?;
        Ok(())
    }
}

// Small heap so several test containers fit on one runner. Startup readiness
// is decided by `connect`, the fixed wait only skips the first few seconds.
fn image() -> GenericImage {
    GenericImage::new(IMAGE, IMAGE_TAG)
        .with_env_var("NEO4J_AUTH", format!("{USER}/{PASSWORD}"))
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(BOLT_PORT)
        .with_wait_for(WaitFor::seconds(5))
}

async fn connect(uri: &str) -> HarnessResult<Graph> {
    let mut backoff = FIRST_BACKOFF;
    let mut failure = String::from("no attempt made");

    for attempt in 1..=CONNECT_ATTEMPTS {
        match ping(uri).await {
            Ok(graph) => {
                tracing::debug!(attempt, uri, "Test Neo4j ready");
                return Ok(graph);
            }
            Err(e) => failure = e,
        }

        tracing::debug!(attempt, error = %failure, "Test Neo4j not ready yet");
        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }

    Err(format!("test Neo4j at {uri} never became ready: {failure}").into())
}

/// Open a connection and prove it can run a query.
async fn ping(uri: &str) -> Result<Graph, String> {
    let graph = Graph::new(uri, USER, PASSWORD)
        .await
        .map_err(|e| e.to_string())?;
    graph
        .run(query("RETURN 1"))
        .await
        .map_err(|e| format!("ping query: {e}"))?;
    Ok(graph)
}
