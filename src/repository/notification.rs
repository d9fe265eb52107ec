use diesel::prelude::*;

use crate::domain::notification::{
    NewNotification as DomainNewNotification, Notification as DomainNotification,
};
use crate::models::notification::{
    NewNotification as DbNewNotification, Notification as DbNotification,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, NotificationWriter};

impl NotificationWriter for DieselRepository {
    fn create_notification(
        &self,
        new_notification: &DomainNewNotification,
    ) -> RepositoryResult<DomainNotification> {
        use crate::schema::notifications;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(notifications::table)
            .values(&DbNewNotification::from(new_notification))
            .get_result::<DbNotification>(&mut conn)?;

        Ok(DomainNotification::from(created))
    }
}
