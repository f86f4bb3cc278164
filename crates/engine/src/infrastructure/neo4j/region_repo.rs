//! Neo4j region repository.
//!
//! Every mutation that can change which region is active runs in one explicit
//! transaction that first writes the singleton `(:RegionLock {key: 'active'})`
//! node. Neo4j holds that write lock until commit, so concurrent creates,
//! activations and deletes are serialized and the exclusivity invariant
//! survives read-committed isolation.
//!
//! Containment uses a two-stage query: `point.withinBBox` against the stored
//! bounding box corners narrows candidates in the database, then the exact
//! ring test runs on the decoded polygon.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geoward_domain::{Coordinate, Polygon, Region, RegionId, RegionName};
use neo4rs::{query, Graph, Query, Row, Txn};

use super::helpers::{finish_txn, format_datetime, NodeExt};
use crate::infrastructure::ports::{RegionRepo, RepoError};

pub struct Neo4jRegionRepo {
    graph: Graph,
}

impl Neo4jRegionRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn collect(&self, q: Query, operation: &'static str) -> Result<Vec<Region>, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let mut regions = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            regions.push(row_to_region(&row)?);
        }
        Ok(regions)
    }
}

// =============================================================================
// Row conversion
// =============================================================================

fn row_to_region(row: &Row) -> Result<Region, RepoError> {
    let node: neo4rs::Node = row
        .get("r")
        .map_err(|e| RepoError::database("query", e))?;

    let id: RegionId = node
        .get_string_strict("id")?
        .parse()
        .map_err(RepoError::serialization)?;
    let name = RegionName::new(node.get_string_strict("name")?)
        .map_err(RepoError::serialization)?;
    let polygon: Polygon = node.get_json_strict("polygon")?;

    Ok(Region::from_storage(
        id,
        name,
        node.get_optional_string("description"),
        polygon,
        node.get_bool_or("is_active", false),
        node.get_datetime_strict("created_at")?,
        node.get_datetime_strict("updated_at")?,
    ))
}

/// Shared parameters for the stored shape of a region.
fn with_shape_params(q: Query, region: &Region) -> Result<Query, RepoError> {
    let polygon_json =
        serde_json::to_string(region.polygon()).map_err(RepoError::serialization)?;
    let bbox = region.polygon().bounding_box();

    Ok(q.param("id", region.id().to_string())
        .param("name", region.name().to_string())
        .param(
            "description",
            region.description().unwrap_or_default().to_string(),
        )
        .param("polygon", polygon_json)
        .param("sw_lng", bbox.south_west.longitude)
        .param("sw_lat", bbox.south_west.latitude)
        .param("ne_lng", bbox.north_east.longitude)
        .param("ne_lat", bbox.north_east.latitude)
        .param("updated_at", format_datetime(region.updated_at())))
}

// =============================================================================
// Transaction steps
// =============================================================================

async fn lock_regions(txn: &mut Txn, now: &str) -> Result<(), RepoError> {
    txn.run(
        query("MERGE (l:RegionLock {key: 'active'}) SET l.locked_at = $now")
            .param("now", now.to_string()),
    )
    .await
    .map_err(|e| RepoError::database("lock_regions", e))
}

async fn deactivate_others(txn: &mut Txn, keep: RegionId, now: &str) -> Result<(), RepoError> {
    txn.run(
        query(
            "MATCH (r:Region {is_active: true})
            WHERE r.id <> $keep
            SET r.is_active = false, r.updated_at = $now",
        )
        .param("keep", keep.to_string())
        .param("now", now.to_string()),
    )
    .await
    .map_err(|e| RepoError::database("deactivate_regions", e))
}

async fn create_steps(txn: &mut Txn, region: &Region) -> Result<(), RepoError> {
    let now = format_datetime(region.created_at());
    lock_regions(txn, &now).await?;
    deactivate_others(txn, region.id(), &now).await?;

    let q = with_shape_params(
        query(
            "CREATE (r:Region {
                id: $id,
                name: $name,
                description: $description,
                polygon: $polygon,
                is_active: $is_active,
                bbox_sw: point({longitude: $sw_lng, latitude: $sw_lat}),
                bbox_ne: point({longitude: $ne_lng, latitude: $ne_lat}),
                created_at: $created_at,
                updated_at: $updated_at
            })",
        ),
        region,
    )?
    .param("is_active", region.is_active())
    .param("created_at", now);

    txn.run(q)
        .await
        .map_err(|e| RepoError::database("create_region", e))
}

async fn update_steps(
    txn: &mut Txn,
    region: &Region,
    activation: Option<bool>,
) -> Result<Region, RepoError> {
    let now = format_datetime(region.updated_at());
    lock_regions(txn, &now).await?;

    if activation == Some(true) {
        deactivate_others(txn, region.id(), &now).await?;
    }

    let status_clause = if activation.is_some() {
        ", r.is_active = $is_active"
    } else {
        ""
    };
    let cypher = format!(
        "MATCH (r:Region {{id: $id}})
        SET r.name = $name,
            r.description = $description,
            r.polygon = $polygon,
            r.bbox_sw = point({{longitude: $sw_lng, latitude: $sw_lat}}),
            r.bbox_ne = point({{longitude: $ne_lng, latitude: $ne_lat}}),
            r.updated_at = $updated_at{status_clause}
        RETURN r"
    );
    let q = with_shape_params(query(&cypher), region)?
        .param("is_active", activation.unwrap_or_default());

    let mut result = txn
        .execute(q)
        .await
        .map_err(|e| RepoError::database("update_region", e))?;
    let row = result
        .next(txn.handle())
        .await
        .map_err(|e| RepoError::database("update_region", e))?
        .ok_or_else(|| RepoError::not_found("Region", region.id()))?;

    row_to_region(&row)
}

async fn delete_steps(
    txn: &mut Txn,
    id: RegionId,
    now: DateTime<Utc>,
) -> Result<Option<RegionId>, RepoError> {
    let now = format_datetime(now);
    lock_regions(txn, &now).await?;

    let mut deleted = txn
        .execute(
            query(
                "MATCH (r:Region {id: $id})
                WITH r, r.is_active AS was_active
                DETACH DELETE r
                RETURN was_active",
            )
            .param("id", id.to_string()),
        )
        .await
        .map_err(|e| RepoError::database("delete_region", e))?;
    let row = deleted
        .next(txn.handle())
        .await
        .map_err(|e| RepoError::database("delete_region", e))?
        .ok_or_else(|| RepoError::not_found("Region", id))?;
    let was_active: bool = row
        .get("was_active")
        .map_err(|e| RepoError::database("delete_region", e))?;

    if !was_active {
        return Ok(None);
    }

    let mut promoted = txn
        .execute(
            query(
                "MATCH (r:Region)
                WITH r ORDER BY r.created_at DESC LIMIT 1
                SET r.is_active = true, r.updated_at = $now
                RETURN r.id AS id",
            )
            .param("now", now),
        )
        .await
        .map_err(|e| RepoError::database("promote_region", e))?;

    match promoted
        .next(txn.handle())
        .await
        .map_err(|e| RepoError::database("promote_region", e))?
    {
        Some(row) => {
            let raw: String = row
                .get("id")
                .map_err(|e| RepoError::database("promote_region", e))?;
            Ok(Some(raw.parse().map_err(RepoError::serialization)?))
        }
        None => Ok(None),
    }
}

// =============================================================================
// Port implementation
// =============================================================================

#[async_trait]
impl RegionRepo for Neo4jRegionRepo {
    async fn get(&self, id: RegionId) -> Result<Option<Region>, RepoError> {
        let q = query("MATCH (r:Region {id: $id}) RETURN r").param("id", id.to_string());
        Ok(self.collect(q, "get_region").await?.into_iter().next())
    }

    async fn list_active(&self) -> Result<Vec<Region>, RepoError> {
        let q = query(
            "MATCH (r:Region {is_active: true})
            RETURN r
            ORDER BY r.created_at DESC",
        );
        self.collect(q, "list_active_regions").await
    }

    async fn create(&self, region: &Region) -> Result<(), RepoError> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("create_region", e))?;
        let result = create_steps(&mut txn, region).await;
        finish_txn(txn, result, "create_region").await?;

        tracing::info!(region_id = %region.id(), name = %region.name(), "Created active region");
        Ok(())
    }

    async fn update(
        &self,
        region: &Region,
        activation: Option<bool>,
    ) -> Result<Region, RepoError> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("update_region", e))?;
        let result = update_steps(&mut txn, region, activation).await;
        let stored = finish_txn(txn, result, "update_region").await?;

        tracing::debug!(region_id = %stored.id(), is_active = stored.is_active(), "Updated region");
        Ok(stored)
    }

    async fn delete(
        &self,
        id: RegionId,
        now: DateTime<Utc>,
    ) -> Result<Option<RegionId>, RepoError> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("delete_region", e))?;
        let result = delete_steps(&mut txn, id, now).await;
        finish_txn(txn, result, "delete_region").await
    }

    async fn find_active_containing(&self, point: Coordinate) -> Result<Vec<Region>, RepoError> {
        let q = query(
            "MATCH (r:Region {is_active: true})
            WHERE point.withinBBox(
                point({longitude: $lng, latitude: $lat}),
                r.bbox_sw,
                r.bbox_ne
            )
            RETURN r
            ORDER BY r.created_at DESC",
        )
        .param("lng", point.longitude)
        .param("lat", point.latitude);

        let candidates = self.collect(q, "find_containing_regions").await?;
        let candidate_count = candidates.len();
        let matches: Vec<Region> = candidates
            .into_iter()
            .filter(|r| r.contains(&point))
            .collect();

        tracing::debug!(
            longitude = point.longitude,
            latitude = point.latitude,
            candidates = candidate_count,
            matches = matches.len(),
            "Containment query"
        );
        Ok(matches)
    }
}
