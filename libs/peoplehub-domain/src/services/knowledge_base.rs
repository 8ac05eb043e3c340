//! Knowledge base context

use crate::error::Result;
use crate::ports::Filter;
use crate::records::KnowledgeArticle;

use super::RecordService;

/// Service bound to the `KnowledgeBaseRepository` port
pub type KnowledgeBaseService = RecordService<KnowledgeArticle>;

impl RecordService<KnowledgeArticle> {
    /// Case-insensitive search over title, body and tags
    ///
    /// Title matches rank before body or tag matches.
    pub async fn search(&self, term: &str) -> Result<Vec<KnowledgeArticle>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let mut hits: Vec<(bool, KnowledgeArticle)> = self
            .list(&Filter::all())
            .await?
            .into_iter()
            .filter_map(|article| {
                let in_title = article.title.to_lowercase().contains(&needle);
                let elsewhere = article.body.to_lowercase().contains(&needle)
                    || article.tags.iter().any(|t| t.to_lowercase() == needle);
                (in_title || elsewhere).then_some((in_title, article))
            })
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(hits.into_iter().map(|(_, article)| article).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ports::ClientRepository;
    use crate::records::CreateKnowledgeArticle;
    use crate::services::testing::StubClient;

    #[tokio::test]
    async fn test_search_ranks_title_hits_first() {
        let service = KnowledgeBaseService::new(Arc::new(
            ClientRepository::<KnowledgeArticle>::new(StubClient::shared()),
        ));
        let article = |title: &str, body: &str, tags: &[&str]| CreateKnowledgeArticle {
            title: title.to_string(),
            body: body.to_string(),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        };

        service
            .create(article("Expenses", "How to claim parental leave costs", &[]))
            .await
            .unwrap();
        service
            .create(article("Parental leave policy", "Eligibility rules", &["leave"]))
            .await
            .unwrap();
        service
            .create(article("Laptop setup", "Install the VPN", &["it"]))
            .await
            .unwrap();

        let hits = service.search("Parental").await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Parental leave policy");

        assert!(service.search("   ").await.unwrap().is_empty());
    }
}
