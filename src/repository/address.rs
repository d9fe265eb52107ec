use diesel::prelude::*;

use crate::domain::address::{Address as DomainAddress, NewAddress as DomainNewAddress};
use crate::models::address::{Address as DbAddress, NewAddress as DbNewAddress};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AddressReader, AddressWriter, DieselRepository};

impl AddressReader for DieselRepository {
    fn get_address_by_id(&self, id: i32) -> RepositoryResult<Option<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;
        let address = addresses::table
            .filter(addresses::id.eq(id))
            .first::<DbAddress>(&mut conn)
            .optional()?;

        Ok(address.map(DomainAddress::from))
    }

    fn list_addresses(&self, user_id: i32) -> RepositoryResult<Vec<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;
        let rows = addresses::table
            .filter(addresses::user_id.eq(user_id))
            .order(addresses::created_at.asc())
            .load::<DbAddress>(&mut conn)?;

        Ok(rows.into_iter().map(DomainAddress::from).collect())
    }
}

impl AddressWriter for DieselRepository {
    fn create_address(&self, new_address: &DomainNewAddress) -> RepositoryResult<DomainAddress> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        conn.transaction::<DomainAddress, RepositoryError, _>(|conn| {
            if new_address.is_default {
                diesel::update(
                    addresses::table
                        .filter(addresses::user_id.eq(new_address.user_id))
                        .filter(addresses::is_default.eq(true)),
                )
                .set(addresses::is_default.eq(false))
                .execute(conn)?;
            }

            let created = diesel::insert_into(addresses::table)
                .values(&DbNewAddress::from(new_address))
                .get_result::<DbAddress>(conn)?;

            Ok(DomainAddress::from(created))
        })
    }

    fn delete_address(&self, address_id: i32) -> RepositoryResult<()> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(addresses::table.filter(addresses::id.eq(address_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
