//! Skill progress and project skill handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peoplehub_domain::records::{ProjectSkill, Skill, SkillProgress, TrackSkillProgress};
use peoplehub_domain::services::{ProjectsService, SkillsService};
use peoplehub_domain::DeleteAck;

use crate::error::ApiError;
use crate::extract::{record_id, Validated};

/// `POST /skills/:id/employees/:employee_id/progress`
///
/// The skill and employee come from the path; the body only carries the
/// observation.
pub async fn track_progress(
    State(service): State<Arc<SkillsService>>,
    Path((skill_id, employee_id)): Path<(String, String)>,
    Validated(observation): Validated<TrackSkillProgress>,
) -> Result<(StatusCode, Json<SkillProgress>), ApiError> {
    let skill_id = record_id("skillId", &skill_id)?;
    let employee_id = record_id("employeeId", &employee_id)?;
    let progress = service
        .track_progress(skill_id, employee_id, observation)
        .await?;
    Ok((StatusCode::CREATED, Json(progress)))
}

pub async fn progress_for(
    State(service): State<Arc<SkillsService>>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<SkillProgress>>, ApiError> {
    let employee_id = record_id("employeeId", &employee_id)?;
    Ok(Json(service.progress_for(employee_id).await?))
}

pub async fn link_skill(
    State(service): State<Arc<ProjectsService>>,
    Path((project_id, skill_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<ProjectSkill>), ApiError> {
    let project_id = record_id("projectId", &project_id)?;
    let skill_id = record_id("skillId", &skill_id)?;
    let link = service.link_skill(project_id, skill_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn unlink_skill(
    State(service): State<Arc<ProjectsService>>,
    Path((project_id, skill_id)): Path<(String, String)>,
) -> Result<Json<DeleteAck>, ApiError> {
    let project_id = record_id("projectId", &project_id)?;
    let skill_id = record_id("skillId", &skill_id)?;
    Ok(Json(service.unlink_skill(project_id, skill_id).await?))
}

pub async fn project_skills(
    State(service): State<Arc<ProjectsService>>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let project_id = record_id("projectId", &project_id)?;
    Ok(Json(service.skills_of(project_id).await?))
}
