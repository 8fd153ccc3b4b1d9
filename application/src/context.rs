//! [`Context`]-related definitions.

use std::{
    fmt,
    sync::{
        atomic::{self, AtomicU16},
        Arc,
    },
};

use axum::{async_trait, extract::FromRequestParts, RequestPartsExt as _};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use juniper::{
    http::{GraphQLBatchResponse, GraphQLResponse},
    IntoFieldError as _,
};
use secrecy::{ExposeSecret as _, SecretString};

use crate::{define_error, AsError as _, Error, JuniperResponse, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// [`AdminToken`] to authorize catalogue management with.
    admin_token: AdminToken,

    /// Error status code.
    error_status_code: AtomicU16,

    /// Parts of the HTTP request.
    parts: http::request::Parts,
}

impl Context {
    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the error status code of this [`Context`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn error_status_code(&self) -> http::StatusCode {
        http::StatusCode::from_u16(
            self.error_status_code.load(atomic::Ordering::Relaxed),
        )
        .expect("invalid status code")
    }

    /// Sets the error status code for this [`Context`].
    ///
    /// Provided [`http::StatusCode`] will be applied to the response.
    pub fn set_error_status_code(&self, status_code: http::StatusCode) {
        self.error_status_code
            .store(status_code.as_u16(), atomic::Ordering::Relaxed);
    }

    /// Helper method calling [`Context::set_error_status_code()`] inside
    /// [`Result::map_err()`] closure.
    pub fn error(&self) -> impl FnOnce(Error) -> Error + '_ {
        move |err| {
            self.set_error_status_code(err.status_code);
            err
        }
    }

    /// Ensures the current HTTP request is authorized with the
    /// [`AdminToken`].
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the current HTTP request is not authorized;
    /// - the provided bearer token doesn't match the [`AdminToken`].
    pub async fn authorize_admin(&self) -> Result<(), Error> {
        let res = self
            .parts
            .clone()
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await;
        match res {
            Ok(TypedHeader(Authorization(bearer))) => {
                if self.admin_token.matches(bearer.token()) {
                    Ok(())
                } else {
                    Err(AuthError::WrongToken.into())
                }
            }
            Err(e) => {
                if e.is_missing() {
                    Err(AuthError::AuthorizationRequired.into())
                } else {
                    Err(e.into_error())
                }
            }
        }
        .map_err(self.error())
    }
}

impl juniper::Context for Context {}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = JuniperResponse;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let missing = |what: &str| JuniperResponse {
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            response: GraphQLBatchResponse::Single(GraphQLResponse::error(
                Error::internal(&format!("missing `{what}` extension"))
                    .into_field_error(),
            )),
        };

        let service = parts
            .extensions
            .get::<Service>()
            .cloned()
            .ok_or_else(|| missing("Service"))?;
        let admin_token = parts
            .extensions
            .get::<AdminToken>()
            .cloned()
            .ok_or_else(|| missing("AdminToken"))?;

        Ok(Self {
            service,
            admin_token,
            error_status_code: AtomicU16::new(
                http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            ),
            parts: parts.clone(),
        })
    }
}

/// Bearer token granting access to the catalogue management.
#[derive(Clone)]
pub struct AdminToken(Arc<SecretString>);

impl AdminToken {
    /// Creates a new [`AdminToken`] out of the provided secret.
    ///
    /// [`None`] is returned if the secret is blank.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        (!token.trim().is_empty())
            .then(|| Self(Arc::new(SecretString::from(token))))
    }

    /// Checks whether the provided `token` matches this [`AdminToken`].
    fn matches(&self, token: &str) -> bool {
        let expected = self.0.expose_secret().as_bytes();
        let token = token.as_bytes();

        // Compares in constant time for tokens of the same length.
        expected.len() == token.len()
            && expected
                .iter()
                .zip(token)
                .fold(0, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(***)")
    }
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,

        #[code = "WRONG_TOKEN"]
        #[status = FORBIDDEN]
        #[message = "Provided token doesn't grant the requested access"]
        WrongToken,
    }
}

#[cfg(test)]
mod spec {
    use crate::config::Auth;

    use super::AdminToken;

    #[test]
    fn refuses_blank_token() {
        assert!(AdminToken::new(Auth::default().admin_token).is_none());
        assert!(AdminToken::new("").is_none());
        assert!(AdminToken::new("   ").is_none());
        assert!(AdminToken::new("s3cr3t").is_some());
    }

    #[test]
    fn matches_same_token_only() {
        let token = AdminToken::new("s3cr3t").unwrap();

        assert!(token.matches("s3cr3t"));
        assert!(!token.matches("s3cr3T"));
        assert!(!token.matches("s3cr3t-longer"));
        assert!(!token.matches(""));
    }

    #[test]
    fn hides_secret_in_debug() {
        assert_eq!(
            format!("{:?}", AdminToken::new("s3cr3t").unwrap()),
            "AdminToken(***)",
        );
    }
}
