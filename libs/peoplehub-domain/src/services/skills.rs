//! Skills context

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::entity::to_document;
use crate::error::Result;
use crate::ids::RecordId;
use crate::ports::{ClientRepository, Filter, PersistenceClient};
use crate::records::{Skill, SkillProgress, TrackSkillProgress};

use super::RecordService;

pub struct SkillsService {
    skills: Arc<RecordService<Skill>>,
    progress: ClientRepository<SkillProgress>,
}

impl SkillsService {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            skills: Arc::new(RecordService::new(Arc::new(ClientRepository::<Skill>::new(
                client.clone(),
            )))),
            progress: ClientRepository::new(client),
        }
    }

    pub fn skills(&self) -> &Arc<RecordService<Skill>> {
        &self.skills
    }

    /// Record a proficiency observation for an employee on a skill
    ///
    /// # Errors
    ///
    /// `DomainError::NotFound` if the skill does not exist
    pub async fn track_progress(
        &self,
        skill_id: RecordId,
        employee_id: RecordId,
        observation: TrackSkillProgress,
    ) -> Result<SkillProgress> {
        self.skills.get(skill_id).await?;

        let mut fields = to_document(&observation)?;
        fields.insert("skillId".into(), json!(skill_id));
        fields.insert("employeeId".into(), json!(employee_id));
        let progress = self.progress.insert(fields).await?;
        info!(
            skill_id = %skill_id,
            employee_id = %employee_id,
            level = %progress.level,
            "Skill progress tracked"
        );
        Ok(progress)
    }

    /// Progress history of an employee, oldest first
    pub async fn progress_for(&self, employee_id: RecordId) -> Result<Vec<SkillProgress>> {
        let mut history = self
            .progress
            .select(&Filter::all().where_eq("employeeId", employee_id.to_string()))
            .await?;
        history.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(history)
    }
}
