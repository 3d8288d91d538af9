//! Authentication gate for protected endpoints.
//!
//! Resolves an identity from the `Authorization: Bearer` header or the
//! access-token cookie (header wins), verifies it, and injects an
//! [`AuthContext`] into the request. The three rejection outcomes are
//! deliberately distinct: 401 means no credential was presented, 403 means
//! a credential was presented and failed, and 500 covers internal faults
//! without leaking what went wrong.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use tb_core::domain::entities::token::Claims;
use tb_core::errors::DomainError;
use tb_core::repositories::TokenRepository;
use tb_core::services::token::TokenService;
use tb_shared::types::response::ErrorResponse;

/// Name of the HttpOnly cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Name of the HttpOnly cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the verified token's subject
    pub user_id: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

/// Verification seam the gate depends on.
///
/// Lets the middleware hold any `TokenService` behind dynamic dispatch
/// instead of dragging the repository type parameter through the app
/// factory.
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

impl<R: TokenRepository> AccessTokenVerifier for TokenService<R> {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        TokenService::verify_access_token(self, token)
    }
}

/// Authentication gate middleware factory
pub struct RequireAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl RequireAuth {
    /// Creates the gate around the given verifier
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// Authentication gate middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            match resolve_identity(&req, verifier.as_ref()) {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Err(rejection) => {
                    let response = rejection.into_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Gate rejection outcomes, in policy order
enum AuthRejection {
    /// No credential presented by either transport
    MissingToken,
    /// A credential was presented and failed verification
    InvalidToken,
    /// Internal fault during resolution; detail stays in the logs
    Internal,
}

impl AuthRejection {
    fn into_response(self) -> HttpResponse {
        match self {
            AuthRejection::MissingToken => {
                HttpResponse::Unauthorized().json(ErrorResponse::new("Access token required"))
            }
            AuthRejection::InvalidToken => {
                HttpResponse::Forbidden().json(ErrorResponse::new("Invalid or expired token"))
            }
            AuthRejection::Internal => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal authentication error")),
        }
    }
}

fn resolve_identity(
    req: &ServiceRequest,
    verifier: &dyn AccessTokenVerifier,
) -> Result<AuthContext, AuthRejection> {
    // A well-formed bearer header wins; the cookie is the fallback
    let token = extract_bearer_token(req)
        .or_else(|| req.cookie(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string()))
        .ok_or(AuthRejection::MissingToken)?;

    match verifier.verify_access_token(&token) {
        Ok(claims) => Ok(AuthContext::from_claims(claims)),
        Err(DomainError::Token(_)) => Err(AuthRejection::InvalidToken),
        Err(error) => {
            log::error!("Auth middleware error: {}", error);
            Err(AuthRejection::Internal)
        }
    }
}

/// Extracts a `Bearer` token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
