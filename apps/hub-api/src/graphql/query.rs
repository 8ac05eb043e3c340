//! Read side of the GraphQL schema
//!
//! Lookups by id answer `null` for a missing record instead of an error.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use peoplehub_domain::records::AnalyticsRange;
use peoplehub_domain::services::{
    CareerService, InsightsService, RecommendationsService, SkillsService,
};
use peoplehub_domain::DomainError;

use super::errors::{graphql_error, record_id};
use super::inputs::AnalyticsRangeInput;
use super::types::{Analytics, Career, Recommendation, SkillProgress};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Career goals of one employee
    async fn careers(&self, ctx: &Context<'_>, employee_id: ID) -> Result<Vec<Career>> {
        let service = ctx.data::<Arc<CareerService>>()?;
        let employee_id = record_id("employeeId", &employee_id)?;
        let careers = service
            .for_employee(employee_id)
            .await
            .map_err(graphql_error)?;
        Ok(careers.into_iter().map(Career::from).collect())
    }

    /// A single career goal, null when it does not exist
    async fn career(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Career>> {
        let service = ctx.data::<Arc<CareerService>>()?;
        let id = record_id("id", &id)?;
        match service.records().get(id).await {
            Ok(career) => Ok(Some(career.into())),
            Err(DomainError::NotFound { .. }) => Ok(None),
            Err(err) => Err(graphql_error(err)),
        }
    }

    /// Recommendations of one employee, most urgent first
    async fn recommendations(
        &self,
        ctx: &Context<'_>,
        employee_id: ID,
    ) -> Result<Vec<Recommendation>> {
        let service = ctx.data::<Arc<RecommendationsService>>()?;
        let employee_id = record_id("employeeId", &employee_id)?;
        let recommendations = service
            .for_employee(employee_id)
            .await
            .map_err(graphql_error)?;
        Ok(recommendations.into_iter().map(Recommendation::from).collect())
    }

    async fn skill_progress(
        &self,
        ctx: &Context<'_>,
        employee_id: ID,
    ) -> Result<Vec<SkillProgress>> {
        let service = ctx.data::<Arc<SkillsService>>()?;
        let employee_id = record_id("employeeId", &employee_id)?;
        let progress = service
            .progress_for(employee_id)
            .await
            .map_err(graphql_error)?;
        Ok(progress.into_iter().map(SkillProgress::from).collect())
    }

    /// Workforce figures for an optional inclusive window
    async fn analytics(
        &self,
        ctx: &Context<'_>,
        range: Option<AnalyticsRangeInput>,
    ) -> Result<Analytics> {
        let service = ctx.data::<Arc<InsightsService>>()?;
        let range: AnalyticsRange = range.unwrap_or_default().into_dto()?;
        let summary = service.analytics(&range).await.map_err(graphql_error)?;
        Ok(summary.into())
    }
}
