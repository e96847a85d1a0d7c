//! News article service.
//!
//! Image files are written before the row that references them and a
//! replaced image is removed only after the row update succeeded.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_core::types::pagination::{PageRequest, PageResponse};
use tmsiti_database::repositories::NewsRepository;
use tmsiti_entity::news::{CreateNews, News, UpdateNews};
use tmsiti_storage::FileStore;

use crate::context::RequestContext;
use crate::upload::{FileUpload, discard, store_optional};

/// Fields that may change on an article.
#[derive(Debug, Clone, Default)]
pub struct UpdateNewsInput {
    /// New headline.
    pub name: Option<String>,
    /// New body.
    pub text: Option<String>,
}

/// Handles news articles.
#[derive(Debug, Clone)]
pub struct NewsService {
    repo: NewsRepository,
    images: FileStore,
}

impl NewsService {
    /// Creates a new news service.
    pub fn new(repo: NewsRepository, images: FileStore) -> Self {
        Self { repo, images }
    }

    /// Lists articles by id, optionally filtered by a headline substring.
    pub async fn list(
        &self,
        query: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<News>> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        self.repo.find_page(query, page).await
    }

    /// Gets one article.
    pub async fn get(&self, id: i64) -> AppResult<News> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("News not found"))
    }

    /// Stores the image, then inserts the article.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        text: String,
        image: FileUpload,
    ) -> AppResult<News> {
        let stored = image.store_in(&self.images).await?;

        let result = self
            .repo
            .create(&CreateNews {
                name,
                text,
                image_path: stored.public_path.clone(),
            })
            .await;

        match result {
            Ok(news) => {
                info!(news_id = news.id, admin = %ctx.username, "News created");
                Ok(news)
            }
            Err(e) => {
                discard(&self.images, Some(&stored)).await;
                Err(e)
            }
        }
    }

    /// Updates an article, replacing its image when a new one is given.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: UpdateNewsInput,
        image: Option<FileUpload>,
    ) -> AppResult<News> {
        let current = self.get(id).await?;
        let stored = store_optional(&self.images, image).await?;

        let changes = UpdateNews {
            name: input.name,
            text: input.text,
            image_path: stored.as_ref().map(|s| s.public_path.clone()),
        };
        let updated = match self.repo.update(id, &changes).await {
            Ok(Some(news)) => news,
            Ok(None) => {
                discard(&self.images, stored.as_ref()).await;
                return Err(AppError::not_found("News not found"));
            }
            Err(e) => {
                discard(&self.images, stored.as_ref()).await;
                return Err(e);
            }
        };

        if stored.is_some() {
            self.images.remove_public(&current.image_path).await;
        }

        info!(news_id = id, admin = %ctx.username, "News updated");
        Ok(updated)
    }

    /// Deletes an article and then its image.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let current = self.get(id).await?;
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("News not found"));
        }
        self.images.remove_public(&current.image_path).await;
        info!(news_id = id, admin = %ctx.username, "News deleted");
        Ok(())
    }
}
