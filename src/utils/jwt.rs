use crate::config::AppConfig;
use crate::models::user::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_okapi::request::OpenApiFromRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub role: Role,
    pub exp: usize,
}

#[derive(Debug, OpenApiFromRequest)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: Role,
}

// Admin surface requires both the admin role and the deployment API key.
#[derive(Debug, OpenApiFromRequest)]
pub struct AdminUser {
    pub user_id: String,
}

pub fn generate_token(
    user_id: &str,
    username: &str,
    role: &Role,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = chrono::Utc::now()
        // Set expiration time to 24 hours
        .checked_add_signed(chrono::Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.clone(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let config = match request.rocket().state::<AppConfig>() {
            Some(config) => config,
            None => return Outcome::Error((Status::InternalServerError, ())),
        };

        let token = match request.headers().get_one("Authorization") {
            Some(token) if token.starts_with("Bearer ") => token[7..].to_string(),
            _ => return Outcome::Error((Status::Unauthorized, ())),
        };

        match decode_token(&token, &config.jwt_secret) {
            Ok(claims) => Outcome::Success(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role,
            }),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = match request.guard::<AuthenticatedUser>().await {
            Outcome::Success(auth) => auth,
            Outcome::Error(err) => return Outcome::Error(err),
            Outcome::Forward(status) => return Outcome::Forward(status),
        };

        if auth.role != Role::Admin {
            return Outcome::Error((Status::Forbidden, ()));
        }

        let config = match request.rocket().state::<AppConfig>() {
            Some(config) => config,
            None => return Outcome::Error((Status::InternalServerError, ())),
        };

        match request.headers().get_one("X-Admin-API-Key") {
            Some(key) if key == config.admin_api_key => {
                Outcome::Success(AdminUser {
                    user_id: auth.user_id,
                })
            }
            _ => Outcome::Error((Status::Forbidden, ())),
        }
    }
}
