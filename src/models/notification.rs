use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::notifications)]
pub struct Notification {
    pub id: i32,
    pub message: String,
    pub link: String,
    pub icon: String,
    pub icon_color: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notifications)]
pub struct NewNotification<'a> {
    pub message: &'a str,
    pub link: &'a str,
    pub icon: &'a str,
    pub icon_color: &'a str,
}

impl From<Notification> for DomainNotification {
    fn from(value: Notification) -> Self {
        Self {
            id: value.id,
            message: value.message,
            link: value.link,
            icon: value.icon,
            icon_color: value.icon_color,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewNotification> for NewNotification<'a> {
    fn from(value: &'a DomainNewNotification) -> Self {
        Self {
            message: value.message.as_str(),
            link: value.link.as_str(),
            icon: value.icon.as_str(),
            icon_color: value.icon_color.as_str(),
        }
    }
}
