//! Training completion, notifications, knowledge base, chatbot and insights

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use peoplehub_domain::records::{
    AnalyticsRange, ChatPrompt, KnowledgeArticle, Notification, Training,
};
use peoplehub_domain::services::{
    AnalyticsSummary, ChatAnswer, ChatbotService, InsightsService, KnowledgeBaseService,
    NotificationsService, TrainingService,
};
use peoplehub_domain::validation::{parse, Constraint, ValidationErrors};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::extract::{record_id, Validated};

pub async fn complete_training(
    State(service): State<Arc<TrainingService>>,
    Path(id): Path<String>,
) -> Result<Json<Training>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.complete(id).await?))
}

pub async fn mark_notification_read(
    State(service): State<Arc<NotificationsService>>,
    Path(id): Path<String>,
) -> Result<Json<Notification>, ApiError> {
    let id = record_id("id", &id)?;
    Ok(Json(service.mark_read(id).await?))
}

/// `GET /knowledge-base/search?q=`
pub async fn search_knowledge_base(
    State(service): State<Arc<KnowledgeBaseService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<KnowledgeArticle>>, ApiError> {
    let term = params
        .get("q")
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ValidationErrors::single("q", Constraint::Required))?;
    Ok(Json(service.search(term).await?))
}

pub async fn ask_chatbot(
    State(service): State<Arc<ChatbotService>>,
    Validated(prompt): Validated<ChatPrompt>,
) -> Result<Json<ChatAnswer>, ApiError> {
    Ok(Json(service.ask(prompt).await?))
}

/// `GET /insights/analytics?startDate=&endDate=`
///
/// The query string goes through the same schema as any JSON body.
pub async fn analytics(
    State(service): State<Arc<InsightsService>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    let body: Map<String, Value> = params
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();
    let range: AnalyticsRange = parse(Value::Object(body))?;
    Ok(Json(service.analytics(&range).await?))
}
