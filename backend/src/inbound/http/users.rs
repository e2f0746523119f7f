//! User lookup and registration handlers.
//!
//! ```text
//! GET  /get_user_profile?email=ada@example.com
//! GET  /get_user_by_email?email=ada@example.com
//! GET  /userrole?email=ada@example.com
//! POST /register {"name":"Ada","contact":"...","email":"...","role":"lender","password_hash":"..."}
//! ```
//!
//! Lookups answer `null` when no user matches; the first matching row wins.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NewUser, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Message returned on successful registration.
pub const REGISTERED_MESSAGE: &str = "User registered successfully!";

/// Query string shared by the email lookups.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Exact, case-sensitive email to match.
    pub email: String,
}

/// Public user profile. The password hash is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileBody {
    #[schema(example = 7)]
    pub id: i64,
    pub name: String,
    pub contact: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "lender")]
    pub role: String,
}

impl From<UserProfile> for UserProfileBody {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.get(),
            name: profile.name,
            contact: profile.contact,
            email: profile.email,
            role: profile.role,
        }
    }
}

/// Response for `GET /get_user_profile`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: Option<UserProfileBody>,
}

/// Response for `GET /get_user_by_email`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserIdResponse {
    pub id: Option<i64>,
}

/// Response for `GET /userrole`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserRoleResponse {
    pub role: Option<String>,
}

/// Registration body for `POST /register`.
///
/// `password_hash` is stored as supplied; no hashing happens here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            contact: request.contact,
            email: request.email,
            role: request.role,
            password_hash: request.password_hash,
        }
    }
}

/// Response for `POST /register`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "User registered successfully!")]
    pub message: String,
    /// Rows inserted by the store, as profiles.
    pub user: Vec<UserProfileBody>,
}

async fn lookup(state: &HttpState, email: &str) -> ApiResult<Option<UserProfile>> {
    state.user_lookup.profile_by_email(email).await
}

/// Full profile of the user with this email.
#[utoipa::path(
    get,
    path = "/get_user_profile",
    params(EmailQuery),
    responses(
        (status = 200, description = "Profile, or null when no user matches", body = ProfileResponse),
        (status = 400, description = "Invalid query or store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserProfile"
)]
#[get("/get_user_profile")]
pub async fn get_user_profile(
    state: web::Data<HttpState>,
    query: web::Query<EmailQuery>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let profile = lookup(&state, &query.email).await?;
    Ok(web::Json(ProfileResponse {
        profile: profile.map(UserProfileBody::from),
    }))
}

/// Identifier of the user with this email.
#[utoipa::path(
    get,
    path = "/get_user_by_email",
    params(EmailQuery),
    responses(
        (status = 200, description = "User id, or null when no user matches", body = UserIdResponse),
        (status = 400, description = "Invalid query or store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserIdByEmail"
)]
#[get("/get_user_by_email")]
pub async fn get_user_id_by_email(
    state: web::Data<HttpState>,
    query: web::Query<EmailQuery>,
) -> ApiResult<web::Json<UserIdResponse>> {
    let profile = lookup(&state, &query.email).await?;
    Ok(web::Json(UserIdResponse {
        id: profile.map(|found| found.id.get()),
    }))
}

/// Role of the user with this email.
#[utoipa::path(
    get,
    path = "/userrole",
    params(EmailQuery),
    responses(
        (status = 200, description = "Role, or null when no user matches", body = UserRoleResponse),
        (status = 400, description = "Invalid query or store failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserRole"
)]
#[get("/userrole")]
pub async fn get_user_role(
    state: web::Data<HttpState>,
    query: web::Query<EmailQuery>,
) -> ApiResult<web::Json<UserRoleResponse>> {
    let profile = lookup(&state, &query.email).await?;
    Ok(web::Json(UserRoleResponse {
        role: profile.map(|found| found.role),
    }))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid body or store failure", body = ErrorSchema),
        (status = 409, description = "Email already exists", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let rows = state
        .registration
        .register(NewUser::from(payload.into_inner()))
        .await?;
    Ok(web::Json(RegisterResponse {
        message: REGISTERED_MESSAGE.to_owned(),
        user: rows.into_iter().map(UserProfileBody::from).collect(),
    }))
}
