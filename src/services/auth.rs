use crate::auth::{self, AuthenticatedUser};
use crate::domain::order::Order;
use crate::domain::user::{NewUser, User};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::repository::{NotificationWriter, OrderReader, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, notifications};

/// Orders shown on the profile page.
const RECENT_ORDER_COUNT: usize = 3;

/// Register a new account. Username and email collisions surface as
/// `Conflict`; a registration notification is written on success.
pub fn register<R>(repo: &R, form: RegisterForm) -> ServiceResult<User>
where
    R: UserWriter + NotificationWriter + ?Sized,
{
    let form = form
        .validated()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let password_hash = auth::hash_password(&form.password)
        .map_err(|err| ServiceError::Internal(format!("password hashing failed: {err}")))?;

    let user = repo
        .create_user(&NewUser::new(form.username, form.email, password_hash))
        .map_err(ServiceError::from)?;

    notifications::notify_user_registered(repo, &user.username);

    Ok(user)
}

/// Verify credentials and produce the claims stored in the identity
/// cookie. Unknown emails, wrong passwords and deactivated accounts all
/// collapse into `InvalidCredentials`.
pub fn authenticate<R>(repo: &R, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    let email = form.email.trim().to_lowercase();

    let user = repo
        .get_user_by_email(&email)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::InvalidCredentials)?;

    if !user.is_active {
        return Err(ServiceError::InvalidCredentials);
    }

    if !auth::verify_password(&form.password, &user.password_hash) {
        return Err(ServiceError::InvalidCredentials);
    }

    Ok(AuthenticatedUser {
        id: user.id,
        username: user.username,
        email: user.email,
        is_admin: user.is_admin,
    })
}

/// Data for the caller's profile page.
pub struct ProfileData {
    pub user: User,
    pub orders: Vec<Order>,
}

/// The caller's account record plus their most recent orders.
pub fn load_profile<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<ProfileData>
where
    R: UserReader + OrderReader + ?Sized,
{
    let account = repo
        .get_user_by_id(user.id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let mut orders = repo
        .list_orders_for_user(user.id)
        .map_err(ServiceError::from)?;
    orders.truncate(RECENT_ORDER_COUNT);

    Ok(ProfileData {
        user: account,
        orders,
    })
}
