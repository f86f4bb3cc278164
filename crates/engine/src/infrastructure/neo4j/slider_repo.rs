//! Neo4j slider repository.

use async_trait::async_trait;
use geoward_domain::{Slider, SliderId};
use neo4rs::{query, Graph, Query, Row};

use super::helpers::{format_datetime, NodeExt};
use crate::infrastructure::ports::{RepoError, SliderRepo};

pub struct Neo4jSliderRepo {
    graph: Graph,
}

impl Neo4jSliderRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn collect(&self, q: Query, operation: &'static str) -> Result<Vec<Slider>, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let mut sliders = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            sliders.push(row_to_slider(&row)?);
        }
        Ok(sliders)
    }
}

fn row_to_slider(row: &Row) -> Result<Slider, RepoError> {
    let node: neo4rs::Node = row
        .get("s")
        .map_err(|e| RepoError::database("query", e))?;
    let id: SliderId = node
        .get_string_strict("id")?
        .parse()
        .map_err(RepoError::serialization)?;

    Ok(Slider::from_storage(
        id,
        node.get_optional_string("title"),
        node.get_string_strict("image_url")?,
        node.get_i64_or("sort_order", 0),
        node.get_bool_or("is_active", true),
        node.get_datetime_strict("created_at")?,
        node.get_datetime_strict("updated_at")?,
    ))
}

#[async_trait]
impl SliderRepo for Neo4jSliderRepo {
    async fn get(&self, id: SliderId) -> Result<Option<Slider>, RepoError> {
        let q = query("MATCH (s:Slider {id: $id}) RETURN s").param("id", id.to_string());
        Ok(self.collect(q, "get_slider").await?.into_iter().next())
    }

    async fn list_active(&self) -> Result<Vec<Slider>, RepoError> {
        let q = query(
            "MATCH (s:Slider {is_active: true})
            RETURN s
            ORDER BY s.sort_order ASC, s.created_at DESC",
        );
        self.collect(q, "list_active_sliders").await
    }

    async fn list_all(&self) -> Result<Vec<Slider>, RepoError> {
        let q = query(
            "MATCH (s:Slider)
            RETURN s
            ORDER BY s.sort_order ASC, s.created_at DESC",
        );
        self.collect(q, "list_sliders").await
    }

    async fn save(&self, slider: &Slider) -> Result<(), RepoError> {
        let q = query(
            "MERGE (s:Slider {id: $id})
            ON CREATE SET s.created_at = $created_at
            SET s.title = $title,
                s.image_url = $image_url,
                s.sort_order = $sort_order,
                s.is_active = $is_active,
                s.updated_at = $updated_at",
        )
        .param("id", slider.id().to_string())
        .param("title", slider.title().unwrap_or_default().to_string())
        .param("image_url", slider.image_url().to_string())
        .param("sort_order", slider.order())
        .param("is_active", slider.is_active())
        .param("created_at", format_datetime(slider.created_at()))
        .param("updated_at", format_datetime(slider.updated_at()));

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("save_slider", e))?;
        tracing::debug!(slider_id = %slider.id(), "Saved slider");
        Ok(())
    }

    async fn delete(&self, id: SliderId) -> Result<(), RepoError> {
        let q = query(
            "MATCH (s:Slider {id: $id})
            DETACH DELETE s
            RETURN count(s) AS deleted",
        )
        .param("id", id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete_slider", e))?;
        let deleted: i64 = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete_slider", e))?
        {
            Some(row) => row
                .get("deleted")
                .map_err(|e| RepoError::database("delete_slider", e))?,
            None => 0,
        };

        if deleted == 0 {
            return Err(RepoError::not_found("Slider", id));
        }
        Ok(())
    }
}
