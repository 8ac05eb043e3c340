//! GraphQL object types over domain records

use async_graphql::{Object, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};
use peoplehub_domain::records::{
    Career as DomainCareer, Recommendation as DomainRecommendation,
    SkillProgress as DomainSkillProgress,
};
use peoplehub_domain::services::AnalyticsSummary;
use peoplehub_domain::DeleteAck as DomainDeleteAck;

use super::inputs::{
    CareerStatus, Priority, ProficiencyLevel, RecommendationStatus, RecommendationType,
};

/// A career goal of an employee
#[derive(Clone)]
pub struct Career {
    pub inner: DomainCareer,
}

impl From<DomainCareer> for Career {
    fn from(career: DomainCareer) -> Self {
        Self { inner: career }
    }
}

#[Object]
impl Career {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn employee_id(&self) -> ID {
        ID(self.inner.employee_id.to_string())
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn status(&self) -> CareerStatus {
        self.inner.status.into()
    }

    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    async fn current_position_id(&self) -> Option<ID> {
        self.inner.current_position_id.map(|id| ID(id.to_string()))
    }

    async fn target_position_id(&self) -> Option<ID> {
        self.inner.target_position_id.map(|id| ID(id.to_string()))
    }

    async fn target_date(&self) -> Option<NaiveDate> {
        self.inner.target_date
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

/// A development recommendation for an employee
#[derive(Clone)]
pub struct Recommendation {
    pub inner: DomainRecommendation,
}

impl From<DomainRecommendation> for Recommendation {
    fn from(recommendation: DomainRecommendation) -> Self {
        Self {
            inner: recommendation,
        }
    }
}

#[Object]
impl Recommendation {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn employee_id(&self) -> ID {
        ID(self.inner.employee_id.to_string())
    }

    #[graphql(name = "type")]
    async fn kind(&self) -> RecommendationType {
        self.inner.kind.into()
    }

    async fn priority(&self) -> Priority {
        self.inner.priority.into()
    }

    async fn status(&self) -> RecommendationStatus {
        self.inner.status.into()
    }

    async fn title(&self) -> &str {
        &self.inner.title
    }

    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    async fn skill_ids(&self) -> Vec<ID> {
        self.inner
            .skill_ids
            .iter()
            .map(|id| ID(id.to_string()))
            .collect()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

/// One proficiency observation
#[derive(Clone)]
pub struct SkillProgress {
    pub inner: DomainSkillProgress,
}

impl From<DomainSkillProgress> for SkillProgress {
    fn from(progress: DomainSkillProgress) -> Self {
        Self { inner: progress }
    }
}

#[Object]
impl SkillProgress {
    async fn id(&self) -> ID {
        ID(self.inner.id.to_string())
    }

    async fn skill_id(&self) -> ID {
        ID(self.inner.skill_id.to_string())
    }

    async fn employee_id(&self) -> ID {
        ID(self.inner.employee_id.to_string())
    }

    async fn level(&self) -> ProficiencyLevel {
        self.inner.level.into()
    }

    async fn evidence(&self) -> Option<&str> {
        self.inner.evidence.as_deref()
    }

    async fn recorded_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}

#[derive(SimpleObject)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(SimpleObject)]
pub struct Analytics {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub hires: u64,
    pub feedback_count: u64,
    pub average_rating: Option<f64>,
    pub recommendations_by_status: Vec<StatusCount>,
    pub narrative: Option<String>,
}

impl From<AnalyticsSummary> for Analytics {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            start_date: summary.start_date,
            end_date: summary.end_date,
            hires: summary.hires as u64,
            feedback_count: summary.feedback_count as u64,
            average_rating: summary.average_rating,
            recommendations_by_status: summary
                .recommendations_by_status
                .into_iter()
                .map(|(status, count)| StatusCount {
                    status,
                    count: count as u64,
                })
                .collect(),
            narrative: summary.narrative,
        }
    }
}

#[derive(SimpleObject)]
pub struct DeleteAck {
    pub success: bool,
}

impl From<DomainDeleteAck> for DeleteAck {
    fn from(ack: DomainDeleteAck) -> Self {
        Self {
            success: ack.success,
        }
    }
}
