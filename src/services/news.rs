use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::news::NewsArticle;
use crate::repository::NewsReader;
use crate::services::{ServiceError, ServiceResult};

/// View of a news article as exposed to clients.
#[derive(Debug, Serialize)]
pub struct NewsView {
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

impl From<NewsArticle> for NewsView {
    fn from(article: NewsArticle) -> Self {
        let excerpt = article.excerpt();
        Self {
            id: article.id,
            title: article.title,
            excerpt,
            content: article.content,
            created_at: article.created_at,
        }
    }
}

/// Published articles, newest first.
pub fn list_news<R>(repo: &R) -> ServiceResult<Vec<NewsView>>
where
    R: NewsReader + ?Sized,
{
    let articles = repo.list_published_news().map_err(ServiceError::from)?;
    Ok(articles.into_iter().map(NewsView::from).collect())
}

/// A single article; drafts are invisible to the storefront.
pub fn get_news<R>(repo: &R, news_id: i32) -> ServiceResult<NewsView>
where
    R: NewsReader + ?Sized,
{
    let article = repo
        .get_news_by_id(news_id)
        .map_err(ServiceError::from)?
        .filter(|article| article.is_published)
        .ok_or(ServiceError::NotFound)?;

    Ok(NewsView::from(article))
}
