//! Neo4j content card repository.

use async_trait::async_trait;
use geoward_domain::{Content, ContentId};
use neo4rs::{query, Graph, Query, Row};

use super::helpers::{format_datetime, NodeExt};
use crate::infrastructure::ports::{ContentRepo, RepoError};

pub struct Neo4jContentRepo {
    graph: Graph,
}

impl Neo4jContentRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn collect(&self, q: Query, operation: &'static str) -> Result<Vec<Content>, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let mut contents = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            contents.push(row_to_content(&row)?);
        }
        Ok(contents)
    }
}

fn row_to_content(row: &Row) -> Result<Content, RepoError> {
    let node: neo4rs::Node = row
        .get("c")
        .map_err(|e| RepoError::database("query", e))?;
    let id: ContentId = node
        .get_string_strict("id")?
        .parse()
        .map_err(RepoError::serialization)?;

    // word_count is derived from the body on load; the stored copy is for queries only.
    Ok(Content::from_storage(
        id,
        node.get_string_strict("title")?,
        node.get_string_strict("content")?,
        node.get_i64_or("sort_order", 0),
        node.get_bool_or("is_active", true),
        node.get_datetime_strict("created_at")?,
        node.get_datetime_strict("updated_at")?,
    ))
}

#[async_trait]
impl ContentRepo for Neo4jContentRepo {
    async fn get(&self, id: ContentId) -> Result<Option<Content>, RepoError> {
        let q = query("MATCH (c:Content {id: $id}) RETURN c").param("id", id.to_string());
        Ok(self.collect(q, "get_content").await?.into_iter().next())
    }

    async fn list_active(&self) -> Result<Vec<Content>, RepoError> {
        let q = query(
            "MATCH (c:Content {is_active: true})
            RETURN c
            ORDER BY c.sort_order ASC, c.created_at DESC",
        );
        self.collect(q, "list_active_contents").await
    }

    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        let q = query(
            "MATCH (c:Content)
            RETURN c
            ORDER BY c.sort_order ASC, c.created_at DESC",
        );
        self.collect(q, "list_contents").await
    }

    async fn save(&self, content: &Content) -> Result<(), RepoError> {
        let q = query(
            "MERGE (c:Content {id: $id})
            ON CREATE SET c.created_at = $created_at
            SET c.title = $title,
                c.content = $content,
                c.word_count = $word_count,
                c.sort_order = $sort_order,
                c.is_active = $is_active,
                c.updated_at = $updated_at",
        )
        .param("id", content.id().to_string())
        .param("title", content.title().to_string())
        .param("content", content.content().to_string())
        .param("word_count", content.word_count() as i64)
        .param("sort_order", content.order())
        .param("is_active", content.is_active())
        .param("created_at", format_datetime(content.created_at()))
        .param("updated_at", format_datetime(content.updated_at()));

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("save_content", e))?;
        tracing::debug!(content_id = %content.id(), "Saved content");
        Ok(())
    }

    async fn delete(&self, id: ContentId) -> Result<(), RepoError> {
        let q = query(
            "MATCH (c:Content {id: $id})
            DETACH DELETE c
            RETURN count(c) AS deleted",
        )
        .param("id", id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete_content", e))?;
        let deleted: i64 = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete_content", e))?
        {
            Some(row) => row
                .get("deleted")
                .map_err(|e| RepoError::database("delete_content", e))?,
            None => 0,
        };

        if deleted == 0 {
            return Err(RepoError::not_found("Content", id));
        }
        Ok(())
    }
}
