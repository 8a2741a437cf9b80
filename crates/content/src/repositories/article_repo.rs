//! Reads from the `articles` collection.

use msru_core::models::Article;
use msru_core::normalize::article_from_raw;
use msru_core::raw::RawArticle;
use msru_directus::{ContentApi, ItemQuery};

use crate::error::ContentError;
use crate::repositories::decode_rows;
use crate::schema::ARTICLES;

/// Provides read access to journal articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// All articles, most recently created first.
    pub async fn get_all_articles(api: &dyn ContentApi) -> Vec<Article> {
        Self::try_all(api).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch articles");
            Vec::new()
        })
    }

    pub async fn try_all(api: &dyn ContentApi) -> Result<Vec<Article>, ContentError> {
        let query = ItemQuery::new().sort("-date_created").all_fields();
        let rows = api.read_items(ARTICLES, &query).await?;

        Ok(decode_rows::<RawArticle>(ARTICLES, rows)
            .into_iter()
            .map(|raw| article_from_raw(raw, |id| api.asset_url(id)))
            .collect())
    }
}
