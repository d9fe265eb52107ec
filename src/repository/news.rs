use diesel::prelude::*;

use crate::domain::news::{NewNewsArticle as DomainNewNewsArticle, NewsArticle};
use crate::models::news::{NewNews as DbNewNews, News as DbNews};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, NewsReader, NewsWriter};

impl NewsReader for DieselRepository {
    fn get_news_by_id(&self, id: i32) -> RepositoryResult<Option<NewsArticle>> {
        use crate::schema::news;

        let mut conn = self.conn()?;
        let article = news::table
            .filter(news::id.eq(id))
            .first::<DbNews>(&mut conn)
            .optional()?;

        Ok(article.map(NewsArticle::from))
    }

    fn list_published_news(&self) -> RepositoryResult<Vec<NewsArticle>> {
        use crate::schema::news;

        let mut conn = self.conn()?;
        let rows = news::table
            .filter(news::is_published.eq(true))
            .order(news::created_at.desc())
            .load::<DbNews>(&mut conn)?;

        Ok(rows.into_iter().map(NewsArticle::from).collect())
    }
}

impl NewsWriter for DieselRepository {
    fn create_news(&self, new_article: &DomainNewNewsArticle) -> RepositoryResult<NewsArticle> {
        use crate::schema::news;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(news::table)
            .values(&DbNewNews::from(new_article))
            .get_result::<DbNews>(&mut conn)?;

        Ok(NewsArticle::from(created))
    }
}
