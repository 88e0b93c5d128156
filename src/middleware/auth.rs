//! The request-pipeline auth gate.
//!
//! [`require_auth`] runs each protected request through four stages and stops
//! at the first one that fails:
//!
//! 1. **Extracting**: find the token (session cookie, then bearer header)
//! 2. **Verifying**: check structure, signature and expiry
//! 3. **Resolving**: load the user the token names from the store
//! 4. **Authorizing**: test the user's role against the route's policy
//!
//! On success the resolved [`Identity`] is inserted into the request
//! extensions and handlers read it back with [`CurrentUser`]. On failure the
//! request is answered immediately and the handler never runs.

use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use marquee_auth::{AuthFailure, CredentialExtractor, TokenCodec};
use marquee_config::Environment;
use marquee_core::{ApiMessage, AppError, INTERNAL_ERROR_MESSAGE};
use marquee_models::Identity;

use crate::identity::{IdentityResolver, ResolveError};
use crate::middleware::role::{AuthorizationPolicy, authorize};

/// Stage of the gate a request was in when it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    Extracting,
    Verifying,
    Resolving,
    Authorizing,
}

impl AuthStage {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthStage::Extracting => "extracting",
            AuthStage::Verifying => "verifying",
            AuthStage::Resolving => "resolving",
            AuthStage::Authorizing => "authorizing",
        }
    }
}

/// Why the gate refused a request.
#[derive(Debug)]
pub enum Rejection {
    /// The caller is not (sufficiently) authenticated: 401 or 403.
    Denied {
        stage: AuthStage,
        failure: AuthFailure,
    },
    /// The gate could not reach a decision: 5xx, no identity disclosed.
    Internal {
        stage: AuthStage,
        error: ResolveError,
    },
}

impl Rejection {
    fn denied(stage: AuthStage, failure: AuthFailure) -> Self {
        Rejection::Denied { stage, failure }
    }

    pub fn stage(&self) -> AuthStage {
        match self {
            Rejection::Denied { stage, .. } | Rejection::Internal { stage, .. } => *stage,
        }
    }

    /// The auth failure, if this rejection is one.
    pub fn failure(&self) -> Option<AuthFailure> {
        match self {
            Rejection::Denied { failure, .. } => Some(*failure),
            Rejection::Internal { .. } => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::Denied { failure, .. } => failure.status(),
            Rejection::Internal {
                error: ResolveError::Timeout(_),
                ..
            } => StatusCode::SERVICE_UNAVAILABLE,
            Rejection::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self, expose_internal_errors: bool) -> ApiMessage {
        match self {
            Rejection::Denied { failure, .. } => {
                ApiMessage::failure(failure.to_string()).with_code(failure.code())
            }
            Rejection::Internal { error, .. } if expose_internal_errors => {
                ApiMessage::failure(error.public_detail()).with_code("INTERNAL_ERROR")
            }
            Rejection::Internal { .. } => {
                ApiMessage::failure(INTERNAL_ERROR_MESSAGE).with_code("INTERNAL_ERROR")
            }
        }
    }
}

impl From<ResolveError> for Rejection {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::UnknownSubject(_) => {
                Rejection::denied(AuthStage::Resolving, AuthFailure::UnknownSubject)
            }
            error => Rejection::Internal {
                stage: AuthStage::Resolving,
                error,
            },
        }
    }
}

struct GateInner {
    extractor: CredentialExtractor,
    codec: TokenCodec,
    resolver: IdentityResolver,
    expose_internal_errors: bool,
}

/// Immutable, shareable auth pipeline: extractor, codec and resolver.
///
/// Built once at startup; cloning only bumps a reference count.
#[derive(Clone)]
pub struct AuthGate {
    inner: Arc<GateInner>,
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("cookie_name", &self.inner.extractor.cookie_name())
            .field("expose_internal_errors", &self.inner.expose_internal_errors)
            .finish_non_exhaustive()
    }
}

impl AuthGate {
    pub fn new(
        extractor: CredentialExtractor,
        codec: TokenCodec,
        resolver: IdentityResolver,
        environment: Environment,
    ) -> Self {
        Self {
            inner: Arc::new(GateInner {
                extractor,
                codec,
                resolver,
                expose_internal_errors: !environment.is_production(),
            }),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.inner.codec
    }

    pub fn exposes_internal_errors(&self) -> bool {
        self.inner.expose_internal_errors
    }

    /// Pairs this gate with a route policy, ready for
    /// `middleware::from_fn_with_state(guard, require_auth)`.
    pub fn guard(&self, policy: AuthorizationPolicy) -> RouteGuard {
        RouteGuard {
            gate: self.clone(),
            policy: Arc::new(policy),
        }
    }

    /// Runs the four stages against one request's headers.
    pub async fn authenticate(
        &self,
        headers: &HeaderMap,
        policy: &AuthorizationPolicy,
    ) -> Result<Identity, Rejection> {
        let credential = self
            .inner
            .extractor
            .extract(headers)
            .map_err(|f| Rejection::denied(AuthStage::Extracting, f))?;

        let claims = self
            .inner
            .codec
            .verify(credential.token())
            .map_err(|f| Rejection::denied(AuthStage::Verifying, f))?;

        let identity = self.inner.resolver.resolve(claims.sub).await?;

        authorize(&identity, policy).map_err(|f| Rejection::denied(AuthStage::Authorizing, f))?;

        debug!(
            user_id = identity.id(),
            role = %identity.role(),
            source = credential.source().as_str(),
            "Request authenticated"
        );

        Ok(identity)
    }
}

/// Middleware state for one route group: the shared gate plus its policy.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    gate: AuthGate,
    policy: Arc<AuthorizationPolicy>,
}

impl RouteGuard {
    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }
}

/// Response marker: the gate has already logged this rejection.
#[derive(Debug, Clone, Copy)]
pub struct RejectionLogged;

/// Auth gate middleware. Mount with
/// `route_layer(middleware::from_fn_with_state(gate.guard(policy), require_auth))`.
pub async fn require_auth(
    State(guard): State<RouteGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    match guard.gate.authenticate(req.headers(), &guard.policy).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(rejection) => {
            let status = rejection.status();
            match &rejection {
                Rejection::Denied { stage, failure } => warn!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    stage = stage.as_str(),
                    code = failure.code(),
                    policy = %guard.policy,
                    "Request rejected by auth gate"
                ),
                Rejection::Internal { stage, error } => error!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    stage = stage.as_str(),
                    error = %error,
                    "Auth gate failed"
                ),
            }

            let body = rejection.body(guard.gate.exposes_internal_errors());
            let mut response = (status, Json(body)).into_response();
            response.extensions_mut().insert(RejectionLogged);
            response
        }
    }
}

/// Extractor for the [`Identity`] attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.0.id()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                AppError::internal(anyhow!("CurrentUser used on a route without require_auth"))
            })
    }
}
