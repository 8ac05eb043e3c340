//! GraphQL surface over the career, recommendation, skill and insight
//! contexts
//!
//! Resolvers reuse the services exported by the modules they import. Inputs
//! are typed GraphQL objects and enums that still run through the same
//! validation contract as REST.

mod errors;
mod inputs;
mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use peoplehub_domain::services::{
    CareerService, InsightsService, RecommendationsService, SkillsService,
};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::composition::{CompositionError, FeatureModule, ModuleContext};
use crate::modules::tokens;

pub type HubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with every service a resolver needs
pub fn build_schema(
    careers: Arc<CareerService>,
    recommendations: Arc<RecommendationsService>,
    skills: Arc<SkillsService>,
    insights: Arc<InsightsService>,
) -> HubSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(careers)
        .data(recommendations)
        .data(skills)
        .data(insights)
        .finish()
}

/// Mounts `POST /graphql` and the GraphiQL page on `GET /graphql`
pub struct GraphqlModule {
    /// Public endpoint, including the mount root, used by GraphiQL
    endpoint: String,
}

impl GraphqlModule {
    pub fn new(mount_root: &str) -> Self {
        Self {
            endpoint: format!("{mount_root}/graphql"),
        }
    }
}

impl FeatureModule for GraphqlModule {
    fn name(&self) -> &'static str {
        "graphql"
    }

    fn imports(&self) -> &'static [&'static str] {
        &["career", "recommendations", "skills", "insights"]
    }

    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
        let schema = build_schema(
            ctx.resolve(tokens::CAREER_SERVICE)?,
            ctx.resolve(tokens::RECOMMENDATIONS_SERVICE)?,
            ctx.resolve(tokens::SKILLS_SERVICE)?,
            ctx.resolve(tokens::INSIGHTS_SERVICE)?,
        );

        let page = GraphiQLSource::build().endpoint(&self.endpoint).finish();
        let graphiql = move || {
            let page = page.clone();
            async move { Html(page) }
        };

        ctx.mount(Router::new().route(
            "/graphql",
            get(graphiql).post_service(GraphQL::new(schema)),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::{value, Request, Variables};
    use peoplehub_adapters::{DisabledAiBackend, InMemoryClient};
    use peoplehub_domain::ports::{ClientRepository, PersistenceClient};
    use peoplehub_domain::records::{Career, Recommendation};
    use serde_json::json;

    use super::*;

    fn schema() -> HubSchema {
        let client: Arc<dyn PersistenceClient> = Arc::new(InMemoryClient::new());
        build_schema(
            Arc::new(CareerService::new(
                Arc::new(ClientRepository::<Career>::new(client.clone())),
                client.clone(),
            )),
            Arc::new(RecommendationsService::new(Arc::new(
                ClientRepository::<Recommendation>::new(client.clone()),
            ))),
            Arc::new(SkillsService::new(client.clone())),
            Arc::new(InsightsService::new(client, Arc::new(DisabledAiBackend))),
        )
    }

    async fn create_career(schema: &HubSchema, employee_id: &str) -> String {
        let create = Request::new(
            "mutation($input: CareerInput!) { createCareer(input: $input) { id } }",
        )
        .variables(Variables::from_json(json!({
            "input": {
                "employeeId": employee_id,
                "title": "Staff engineer",
                "status": "ACTIVE",
                "description": "Own the platform roadmap"
            }
        })));
        let response = schema.execute(create).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        data["createCareer"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_then_query_career() {
        let schema = schema();
        let employee_id = peoplehub_domain::RecordId::new().to_string();
        create_career(&schema, &employee_id).await;

        let query = format!(r#"{{ careers(employeeId: "{employee_id}") {{ title status }} }}"#);
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"careers": [{"title": "Staff engineer", "status": "ACTIVE"}]})
        );
    }

    #[tokio::test]
    async fn test_update_null_clears_and_omitted_keeps() {
        let schema = schema();
        let employee_id = peoplehub_domain::RecordId::new().to_string();
        let id = create_career(&schema, &employee_id).await;

        let update = format!(
            r#"mutation {{ updateCareer(id: "{id}", input: {{ description: null, status: ACHIEVED }}) {{ title status description }} }}"#
        );
        let response = schema.execute(update).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"updateCareer": {"title": "Staff engineer", "status": "ACHIEVED", "description": null}})
        );
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_user_input() {
        let response = schema()
            .execute(
                r#"mutation { createRecommendation(input: { employeeId: "not-a-uuid", type: TRAINING, priority: LOW, title: "  " }) { id } }"#,
            )
            .await;
        let error = &response.errors[0];
        assert_eq!(error.message, "Validation failed");
        let code = error
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code").cloned());
        assert_eq!(code, Some(async_graphql::Value::from("BAD_USER_INPUT")));
    }

    #[tokio::test]
    async fn test_unknown_enum_member_is_refused_by_schema() {
        let employee_id = peoplehub_domain::RecordId::new();
        let response = schema()
            .execute(format!(
                r#"mutation {{ createRecommendation(input: {{ employeeId: "{employee_id}", type: PROMOTION, priority: LOW, title: "Lead" }}) {{ id }} }}"#
            ))
            .await;
        assert!(!response.errors.is_empty());
    }

    #[test]
    fn test_schema_exposes_typed_inputs() {
        let sdl = schema().sdl();
        assert!(sdl.contains("input CareerInput"));
        assert!(sdl.contains("input RecommendationPatch"));
        assert!(sdl.contains("enum ProficiencyLevel"));
        assert!(!sdl.contains("scalar JSON"));
    }

    #[tokio::test]
    async fn test_missing_career_is_null() {
        let id = peoplehub_domain::RecordId::new();
        let response = schema()
            .execute(format!(r#"{{ career(id: "{id}") {{ title }} }}"#))
            .await;
        assert!(response.errors.is_empty());
        assert_eq!(response.data, value!({"career": null}));
    }

    #[tokio::test]
    async fn test_analytics_without_range() {
        let response = schema()
            .execute("{ analytics { hires feedbackCount narrative } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({"analytics": {"hires": 0, "feedbackCount": 0, "narrative": null}})
        );
    }

    #[tokio::test]
    async fn test_analytics_with_typed_range() {
        let response = schema()
            .execute(r#"{ analytics(range: { startDate: "2024-01-01", endDate: "2024-12-31" }) { startDate endDate } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            json!({"analytics": {"startDate": "2024-01-01", "endDate": "2024-12-31"}})
        );
    }
}
