use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest,
};
use mongodb::bson::oid::ObjectId;

use crate::middleware::auth::Claims;

/// Extractor for the authenticated user behind `AuthMiddleware`, with the
/// claim's user id already parsed into an `ObjectId` so handlers can filter
/// by owner directly.
#[derive(Clone)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        match claims {
            Some(claims) => match ObjectId::parse_str(&claims.user_id) {
                Ok(user_id) => ready(Ok(AuthenticatedUser {
                    user_id,
                    email: claims.sub,
                })),
                Err(_) => ready(Err(ErrorUnauthorized("Malformed user id in token"))),
            },
            None => ready(Err(ErrorUnauthorized("User not authenticated"))),
        }
    }
}
