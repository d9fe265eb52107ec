use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::news::{NewNewsArticle as DomainNewNewsArticle, NewsArticle};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::news)]
pub struct News {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::news)]
pub struct NewNews<'a> {
    pub author_id: i32,
    pub title: &'a str,
    pub summary: Option<&'a str>,
    pub content: &'a str,
    pub is_published: bool,
    pub updated_at: NaiveDateTime,
}

impl From<News> for NewsArticle {
    fn from(value: News) -> Self {
        Self {
            id: value.id,
            author_id: value.author_id,
            title: value.title,
            summary: value.summary,
            content: value.content,
            is_published: value.is_published,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewNewsArticle> for NewNews<'a> {
    fn from(value: &'a DomainNewNewsArticle) -> Self {
        Self {
            author_id: value.author_id,
            title: value.title.as_str(),
            summary: value.summary.as_deref(),
            content: value.content.as_str(),
            is_published: value.is_published,
            updated_at: value.updated_at,
        }
    }
}
