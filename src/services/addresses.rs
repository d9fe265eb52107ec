use crate::auth::AuthenticatedUser;
use crate::domain::address::Address;
use crate::forms::addresses::AddAddressForm;
use crate::repository::{AddressReader, AddressWriter};
use crate::services::{ServiceError, ServiceResult};

/// Saved addresses belonging to the caller.
pub fn list_addresses<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Address>>
where
    R: AddressReader + ?Sized,
{
    repo.list_addresses(user.id).map_err(ServiceError::from)
}

/// Save a new address for the caller. Flagging it default unsets the
/// caller's other defaults atomically.
pub fn create_address<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddAddressForm,
) -> ServiceResult<Address>
where
    R: AddressWriter + ?Sized,
{
    let payload = form
        .into_new_address(user.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_address(&payload).map_err(ServiceError::from)
}

/// Delete one of the caller's addresses. Deleting another user's
/// address is unauthorized, not a silent no-op.
pub fn delete_address<R>(
    repo: &R,
    user: &AuthenticatedUser,
    address_id: i32,
) -> ServiceResult<()>
where
    R: AddressReader + AddressWriter + ?Sized,
{
    let address = repo
        .get_address_by_id(address_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if address.user_id != user.id {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_address(address_id).map_err(ServiceError::from)
}
