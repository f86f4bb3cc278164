//! Neo4j feedback repository.

use async_trait::async_trait;
use geoward_domain::{Feedback, FeedbackId};
use neo4rs::{query, Graph, Row};

use super::helpers::{format_datetime, NodeExt};
use crate::infrastructure::ports::{FeedbackRepo, RepoError};

pub struct Neo4jFeedbackRepo {
    graph: Graph,
}

impl Neo4jFeedbackRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn row_to_feedback(row: &Row) -> Result<Feedback, RepoError> {
    let node: neo4rs::Node = row
        .get("f")
        .map_err(|e| RepoError::database("query", e))?;

    Ok(Feedback {
        id: node
            .get_string_strict("id")?
            .parse()
            .map_err(RepoError::serialization)?,
        user_name: node.get_string_strict("user_name")?,
        message: node.get_string_strict("message")?,
        user_id: node.get_optional_string("user_id"),
        created_at: node.get_datetime_strict("created_at")?,
        updated_at: node.get_datetime_strict("updated_at")?,
    })
}

#[async_trait]
impl FeedbackRepo for Neo4jFeedbackRepo {
    async fn save(&self, feedback: &Feedback) -> Result<(), RepoError> {
        let q = query(
            "CREATE (f:Feedback {
                id: $id,
                user_name: $user_name,
                message: $message,
                user_id: $user_id,
                created_at: $created_at,
                updated_at: $updated_at
            })",
        )
        .param("id", feedback.id.to_string())
        .param("user_name", feedback.user_name.clone())
        .param("message", feedback.message.clone())
        .param("user_id", feedback.user_id.clone().unwrap_or_default())
        .param("created_at", format_datetime(feedback.created_at))
        .param("updated_at", format_datetime(feedback.updated_at));

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("save_feedback", e))
    }

    async fn list(&self) -> Result<Vec<Feedback>, RepoError> {
        let mut result = self
            .graph
            .execute(query("MATCH (f:Feedback) RETURN f ORDER BY f.created_at DESC"))
            .await
            .map_err(|e| RepoError::database("list_feedback", e))?;

        let mut entries = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("list_feedback", e))?
        {
            entries.push(row_to_feedback(&row)?);
        }
        Ok(entries)
    }

    async fn delete(&self, id: FeedbackId) -> Result<(), RepoError> {
        let q = query(
            "MATCH (f:Feedback {id: $id})
            DETACH DELETE f
            RETURN count(f) AS deleted",
        )
        .param("id", id.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("delete_feedback", e))?;
        let deleted: i64 = match result
            .next()
            .await
            .map_err(|e| RepoError::database("delete_feedback", e))?
        {
            Some(row) => row
                .get("deleted")
                .map_err(|e| RepoError::database("delete_feedback", e))?,
            None => 0,
        };

        if deleted == 0 {
            return Err(RepoError::not_found("Feedback", id));
        }
        Ok(())
    }
}
