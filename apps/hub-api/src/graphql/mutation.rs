//! Write side of the GraphQL schema
//!
//! Every input is checked against the same DTO schema as its REST
//! counterpart before a service sees it.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use peoplehub_domain::records::{
    CreateCareer, CreateRecommendation, TrackSkillProgress, UpdateCareer, UpdateRecommendation,
};
use peoplehub_domain::services::{CareerService, RecommendationsService, SkillsService};

use super::errors::{graphql_error, record_id};
use super::inputs::{
    CareerInput, CareerPatch, RecommendationInput, RecommendationPatch, SkillProgressInput,
};
use super::types::{Career, DeleteAck, Recommendation, SkillProgress};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_career(&self, ctx: &Context<'_>, input: CareerInput) -> Result<Career> {
        let service = ctx.data::<Arc<CareerService>>()?;
        let draft: CreateCareer = input.into_dto()?;
        let career = service
            .records()
            .create(draft)
            .await
            .map_err(graphql_error)?;
        Ok(career.into())
    }

    async fn update_career(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: CareerPatch,
    ) -> Result<Career> {
        let service = ctx.data::<Arc<CareerService>>()?;
        let id = record_id("id", &id)?;
        let patch: UpdateCareer = input.into_dto()?;
        let career = service
            .records()
            .update(id, patch)
            .await
            .map_err(graphql_error)?;
        Ok(career.into())
    }

    async fn delete_career(&self, ctx: &Context<'_>, id: ID) -> Result<DeleteAck> {
        let service = ctx.data::<Arc<CareerService>>()?;
        let id = record_id("id", &id)?;
        let ack = service.records().delete(id).await.map_err(graphql_error)?;
        Ok(ack.into())
    }

    async fn create_recommendation(
        &self,
        ctx: &Context<'_>,
        input: RecommendationInput,
    ) -> Result<Recommendation> {
        let service = ctx.data::<Arc<RecommendationsService>>()?;
        let draft: CreateRecommendation = input.into_dto()?;
        let recommendation = service.create(draft).await.map_err(graphql_error)?;
        Ok(recommendation.into())
    }

    async fn update_recommendation(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: RecommendationPatch,
    ) -> Result<Recommendation> {
        let service = ctx.data::<Arc<RecommendationsService>>()?;
        let id = record_id("id", &id)?;
        let patch: UpdateRecommendation = input.into_dto()?;
        let recommendation = service.update(id, patch).await.map_err(graphql_error)?;
        Ok(recommendation.into())
    }

    async fn delete_recommendation(&self, ctx: &Context<'_>, id: ID) -> Result<DeleteAck> {
        let service = ctx.data::<Arc<RecommendationsService>>()?;
        let id = record_id("id", &id)?;
        let ack = service.delete(id).await.map_err(graphql_error)?;
        Ok(ack.into())
    }

    /// Record a proficiency observation for an employee on a skill
    async fn track_skill_progress(
        &self,
        ctx: &Context<'_>,
        skill_id: ID,
        employee_id: ID,
        input: SkillProgressInput,
    ) -> Result<SkillProgress> {
        let service = ctx.data::<Arc<SkillsService>>()?;
        let skill_id = record_id("skillId", &skill_id)?;
        let employee_id = record_id("employeeId", &employee_id)?;
        let observation: TrackSkillProgress = input.into_dto()?;
        let progress = service
            .track_progress(skill_id, employee_id, observation)
            .await
            .map_err(graphql_error)?;
        Ok(progress.into())
    }
}
