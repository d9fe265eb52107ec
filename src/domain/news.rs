use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A news article published on the storefront.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewsArticle {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewsArticle {
    /// Short teaser: the summary when present, otherwise the leading
    /// part of the content.
    pub fn excerpt(&self) -> String {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        if self.content.chars().count() > 200 {
            let head: String = self.content.chars().take(200).collect();
            format!("{head}...")
        } else {
            self.content.clone()
        }
    }
}

/// Payload required to insert a news article.
#[derive(Debug, Clone)]
pub struct NewNewsArticle {
    pub author_id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub is_published: bool,
    pub updated_at: NaiveDateTime,
}

impl NewNewsArticle {
    pub fn new(author_id: i32, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            author_id,
            title: title.into(),
            summary: None,
            content: content.into(),
            is_published: false,
            updated_at: now,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }
}
