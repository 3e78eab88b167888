//! Typed endpoint helpers over the cached fetch path
//!
//! Thin wrappers that build the query, go through `get_json`, and
//! deserialize the payload into the data models. All reads share the
//! response cache; two calls with the same arguments inside the freshness
//! window cost one network round-trip.

use crate::data::{Article, ArticleSummary, Category, ListEnvelope};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Fetches the latest articles, optionally restricted to one category.
    pub async fn latest_articles(
        &self,
        category: Option<&str>,
        limit: usize,
    ) -> Result<Vec<ArticleSummary>, ApiError> {
        let mut query = vec![("limit".to_string(), limit.to_string())];
        if let Some(category) = category {
            query.push(("category".to_string(), category.to_string()));
        }

        let value = self.get_json("/articles", &query).await?;
        let envelope: ListEnvelope<ArticleSummary> = serde_json::from_value(value)?;
        Ok(envelope.items)
    }

    /// Fetches one article by its slug.
    pub async fn article_by_slug(&self, slug: &str) -> Result<Article, ApiError> {
        let value = self.get_json(&format!("/articles/{slug}"), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetches all content categories.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let value = self.get_json("/categories", &[]).await?;
        let envelope: ListEnvelope<Category> = serde_json::from_value(value)?;
        Ok(envelope.items)
    }

    /// Full-text search over articles.
    pub async fn search_articles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ArticleSummary>, ApiError> {
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        let value = self.get_json("/search", &params).await?;
        let envelope: ListEnvelope<ArticleSummary> = serde_json::from_value(value)?;
        Ok(envelope.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use mockito::Matcher;

    const LISTING_BODY: &str = r#"{
        "items": [
            {
                "id": 17,
                "slug": "harbour-expansion-approved",
                "title": "Harbour Expansion Approved After Year-Long Review",
                "summary": "Council voted 7-2 to approve the expansion plan.",
                "category": "local",
                "author": "R. Singh",
                "published_at": "2024-07-15T14:30:00Z"
            }
        ],
        "total": 1
    }"#;

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient::new(Config::default().with_base_url(server.url())).expect("client")
    }

    #[tokio::test]
    async fn test_latest_articles_with_category() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/articles")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "5".into()),
                Matcher::UrlEncoded("category".into(), "local".into()),
            ]))
            .with_status(200)
            .with_body(LISTING_BODY)
            .create_async()
            .await;

        let client = client_for(&server);
        let articles = client
            .latest_articles(Some("local"), 5)
            .await
            .expect("listing should parse");

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].slug, "harbour-expansion-approved");
        assert_eq!(articles[0].category, "local");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_article_by_slug() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/articles/harbour-expansion-approved")
            .with_status(200)
            .with_body(
                r#"{
                    "id": 17,
                    "slug": "harbour-expansion-approved",
                    "title": "Harbour Expansion Approved After Year-Long Review",
                    "summary": "Council voted 7-2 to approve the expansion plan.",
                    "body": "After a year of public hearings, council voted on Monday...",
                    "category": "local",
                    "author": "R. Singh",
                    "published_at": "2024-07-15T14:30:00Z"
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let article = client
            .article_by_slug("harbour-expansion-approved")
            .await
            .expect("article should parse");

        assert_eq!(article.id, 17);
        assert!(article.body.starts_with("After a year"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_categories() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/categories")
            .with_status(200)
            .with_body(
                r#"{
                    "items": [
                        {"id": 3, "slug": "local", "name": "Local News", "description": null},
                        {"id": 4, "slug": "sport", "name": "Sport", "description": "Scores and fixtures"}
                    ],
                    "total": 2
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let categories = client.categories().await.expect("categories should parse");

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Local News");
        assert_eq!(categories[1].description.as_deref(), Some("Scores and fixtures"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_articles() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "harbour".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .with_status(200)
            .with_body(LISTING_BODY)
            .create_async()
            .await;

        let client = client_for(&server);
        let results = client
            .search_articles("harbour", 10)
            .await
            .expect("search should parse");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Harbour Expansion Approved After Year-Long Review");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_envelope_shape_mismatch_is_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/categories")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .categories()
            .await
            .expect_err("wrong envelope should fail to decode");
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_repeated_listing_uses_the_cache() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/articles")
            .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
            .with_status(200)
            .with_body(LISTING_BODY)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let first = client.latest_articles(None, 10).await.expect("first");
        let second = client.latest_articles(None, 10).await.expect("second");

        assert_eq!(first.len(), second.len());
        mock.assert_async().await;
    }
}
