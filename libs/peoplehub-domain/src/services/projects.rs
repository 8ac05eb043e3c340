//! Projects context
//!
//! Works straight on the persistence client: projects are plain records and
//! their required skills are join pairs in a separate collection.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::entity::{DeleteAck, Record};
use crate::error::{DomainError, Result};
use crate::ids::RecordId;
use crate::ports::{ClientRepository, Document, Filter, PersistenceClient};
use crate::records::{Project, ProjectSkill, Skill};

use super::RecordService;

pub struct ProjectsService {
    projects: Arc<RecordService<Project>>,
    skills: ClientRepository<Skill>,
    links: ClientRepository<ProjectSkill>,
}

impl ProjectsService {
    pub fn new(client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            projects: Arc::new(RecordService::new(Arc::new(
                ClientRepository::<Project>::new(client.clone()),
            ))),
            skills: ClientRepository::new(client.clone()),
            links: ClientRepository::new(client),
        }
    }

    pub fn projects(&self) -> &Arc<RecordService<Project>> {
        &self.projects
    }

    /// Mark a skill as required by a project
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` if the project or the skill does not exist
    /// - `DomainError::Conflict` if the pair is already linked
    pub async fn link_skill(&self, project_id: RecordId, skill_id: RecordId) -> Result<ProjectSkill> {
        self.projects.get(project_id).await?;
        self.skills.fetch(skill_id).await?;

        let mut pair = Document::new();
        pair.insert("projectId".into(), json!(project_id));
        pair.insert("skillId".into(), json!(skill_id));
        let link = self
            .links
            .insert_unique(pair, &link_key(project_id, skill_id))
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => DomainError::conflict(format!(
                    "skill {skill_id} is already linked to project {project_id}"
                )),
                other => other,
            })?;
        info!(project_id = %project_id, skill_id = %skill_id, "Skill linked to project");
        Ok(link)
    }

    pub async fn unlink_skill(&self, project_id: RecordId, skill_id: RecordId) -> Result<DeleteAck> {
        let link = self
            .find_link(project_id, skill_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(ProjectSkill::COLLECTION, format!("{project_id}/{skill_id}"))
            })?;
        self.links.remove(link.id).await?;
        Ok(DeleteAck::ok())
    }

    /// Skills required by a project
    ///
    /// Links whose skill has since been deleted are skipped.
    pub async fn skills_of(&self, project_id: RecordId) -> Result<Vec<Skill>> {
        self.projects.get(project_id).await?;
        let links = self
            .links
            .select(&Filter::all().where_eq("projectId", project_id.to_string()))
            .await?;

        let mut skills = Vec::with_capacity(links.len());
        for link in links {
            if let Some(skill) = self.skills.find(link.skill_id).await? {
                skills.push(skill);
            }
        }
        Ok(skills)
    }

    async fn find_link(&self, project_id: RecordId, skill_id: RecordId) -> Result<Option<ProjectSkill>> {
        let filter = link_key(project_id, skill_id);
        Ok(self.links.select(&filter).await?.into_iter().next())
    }
}

fn link_key(project_id: RecordId, skill_id: RecordId) -> Filter {
    Filter::all()
        .where_eq("projectId", project_id.to_string())
        .where_eq("skillId", skill_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProjectStatus;
    use crate::records::CreateProject;
    use crate::services::testing::StubClient;

    struct Fixture {
        service: ProjectsService,
        skills: ClientRepository<Skill>,
    }

    fn fixture() -> Fixture {
        let client = StubClient::shared();
        Fixture {
            service: ProjectsService::new(client.clone()),
            skills: ClientRepository::new(client),
        }
    }

    async fn skill(skills: &ClientRepository<Skill>, name: &str) -> Skill {
        let mut fields = Document::new();
        fields.insert("name".into(), json!(name));
        skills.insert(fields).await.unwrap()
    }

    async fn project(service: &ProjectsService) -> Project {
        service
            .projects()
            .create(CreateProject {
                name: "Payroll migration".to_string(),
                status: ProjectStatus::Active,
                description: None,
                start_date: None,
                end_date: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_link_list_unlink() {
        let Fixture { service, skills } = fixture();
        let project = project(&service).await;
        let rust = skill(&skills, "Rust").await;
        let sql = skill(&skills, "SQL").await;

        service.link_skill(project.id, rust.id).await.unwrap();
        service.link_skill(project.id, sql.id).await.unwrap();

        let names: Vec<String> = service
            .skills_of(project.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Rust", "SQL"]);

        assert!(service.unlink_skill(project.id, rust.id).await.unwrap().success);
        assert_eq!(service.skills_of(project.id).await.unwrap().len(), 1);
        assert!(matches!(
            service.unlink_skill(project.id, rust.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_link_twice_conflicts() {
        let Fixture { service, skills } = fixture();
        let project = project(&service).await;
        let rust = skill(&skills, "Rust").await;

        service.link_skill(project.id, rust.id).await.unwrap();
        assert!(matches!(
            service.link_skill(project.id, rust.id).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_link_unknown_skill_is_not_found() {
        let Fixture { service, .. } = fixture();
        let project = project(&service).await;

        assert!(matches!(
            service.link_skill(project.id, RecordId::new()).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
