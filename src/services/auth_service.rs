use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::auth::{LoginRequest, LoginResponse, SignupRequest},
    entity::{
        public_id,
        users::{ActiveModel as UserActive, Column, Entity as Users},
    },
    error::{AppError, AppResult},
    models::UserView,
    response::InsertAck,
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Register a user. Email and phone are each checked for prior use first;
/// the checks and the insert are separate statements.
pub async fn signup(state: &AppState, payload: SignupRequest) -> AppResult<InsertAck> {
    let SignupRequest {
        first_name,
        last_name,
        email,
        password,
        phone,
        avatar,
    } = payload;

    let email_count = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .count(&state.orm)
        .await?;
    let phone_count = Users::find()
        .filter(Column::Phone.eq(phone.as_str()))
        .count(&state.orm)
        .await?;
    if email_count > 0 || phone_count > 0 {
        return Err(AppError::Conflict("Email or phone already exists".into()));
    }

    let password_hash = hash_password(&password)?;

    let now = Utc::now();
    let id = Uuid::new_v4();
    let user_id = public_id(id);
    let tokens = state
        .tokens
        .issue_pair(&email, &first_name, &last_name, &user_id)?;

    UserActive {
        id: Set(id),
        user_id: Set(user_id.clone()),
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        phone: Set(phone),
        password_hash: Set(password_hash),
        avatar: Set(avatar),
        token: Set(Some(tokens.token)),
        refresh_token: Set(Some(tokens.refresh_token)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = %user_id, "user signed up");
    Ok(InsertAck::new(user_id))
}

/// Check credentials, rotate the stored token pair and return it.
///
/// Unknown email and wrong password produce the same error.
pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;
    let user = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into())),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let tokens = state.tokens.issue_pair(
        &user.email,
        &user.first_name,
        &user.last_name,
        &user.user_id,
    )?;

    let mut active: UserActive = user.into();
    active.token = Set(Some(tokens.token.clone()));
    active.refresh_token = Set(Some(tokens.refresh_token.clone()));
    active.updated_at = Set(Utc::now().into());
    let user = active.update(&state.orm).await?;

    tracing::info!(user_id = %user.user_id, "user logged in");
    Ok(LoginResponse {
        user: UserView::from(user),
        token: tokens.token,
        refresh_token: tokens.refresh_token,
    })
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("s3cret!").unwrap();
        let second = hash_password("s3cret!").unwrap();
        assert_ne!(first, second);

        assert!(verify_password("s3cret!", &first).unwrap());
        assert!(!verify_password("wrong", &first).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        assert!(matches!(
            verify_password("s3cret!", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
