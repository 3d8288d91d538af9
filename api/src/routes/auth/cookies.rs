//! HttpOnly auth cookie construction.
//!
//! Both tokens travel as HttpOnly, SameSite=Lax cookies, Secure in
//! production, with max-age matching the token lifetime.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use tb_core::domain::entities::token::{ACCESS_TOKEN_TTL_MINUTES, REFRESH_TOKEN_TTL_DAYS};

use crate::middleware::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Build the access token cookie
pub fn access_token_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE, token.to_string())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::minutes(ACCESS_TOKEN_TTL_MINUTES))
        .finish()
}

/// Build the refresh token cookie
pub fn refresh_token_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build(REFRESH_TOKEN_COOKIE, token.to_string())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::days(REFRESH_TOKEN_TTL_DAYS))
        .finish()
}

/// Removal cookies clearing both tokens on logout
pub fn clear_token_cookies() -> (Cookie<'static>, Cookie<'static>) {
    let mut access = Cookie::new(ACCESS_TOKEN_COOKIE, "");
    access.set_path("/");
    access.make_removal();

    let mut refresh = Cookie::new(REFRESH_TOKEN_COOKIE, "");
    refresh.set_path("/");
    refresh.make_removal();

    (access, refresh)
}
