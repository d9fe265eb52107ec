use diesel::prelude::*;

use crate::domain::credit_card::{
    CreditCard as DomainCreditCard, NewCreditCard as DomainNewCreditCard,
};
use crate::models::credit_card::{CreditCard as DbCreditCard, NewCreditCard as DbNewCreditCard};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CreditCardReader, CreditCardWriter, DieselRepository};

impl CreditCardReader for DieselRepository {
    fn get_credit_card_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCreditCard>> {
        use crate::schema::credit_cards;

        let mut conn = self.conn()?;
        let card = credit_cards::table
            .filter(credit_cards::id.eq(id))
            .first::<DbCreditCard>(&mut conn)
            .optional()?;

        Ok(card.map(DomainCreditCard::from))
    }

    fn list_credit_cards(&self, user_id: i32) -> RepositoryResult<Vec<DomainCreditCard>> {
        use crate::schema::credit_cards;

        let mut conn = self.conn()?;
        let rows = credit_cards::table
            .filter(credit_cards::user_id.eq(user_id))
            .order(credit_cards::created_at.asc())
            .load::<DbCreditCard>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCreditCard::from).collect())
    }
}

impl CreditCardWriter for DieselRepository {
    fn create_credit_card(
        &self,
        new_card: &DomainNewCreditCard,
    ) -> RepositoryResult<DomainCreditCard> {
        use crate::schema::credit_cards;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCreditCard, RepositoryError, _>(|conn| {
            if new_card.is_default {
                diesel::update(
                    credit_cards::table
                        .filter(credit_cards::user_id.eq(new_card.user_id))
                        .filter(credit_cards::is_default.eq(true)),
                )
                .set(credit_cards::is_default.eq(false))
                .execute(conn)?;
            }

            let created = diesel::insert_into(credit_cards::table)
                .values(&DbNewCreditCard::from(new_card))
                .get_result::<DbCreditCard>(conn)?;

            Ok(DomainCreditCard::from(created))
        })
    }

    fn delete_credit_card(&self, card_id: i32) -> RepositoryResult<()> {
        use crate::schema::credit_cards;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(credit_cards::table.filter(credit_cards::id.eq(card_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
