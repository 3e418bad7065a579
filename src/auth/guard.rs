use super::permissions::RequiredPermission;
use super::{authorize, AccessClaims, AuthError};
use crate::state::AppState;
use axum::extract::{FromRef, FromRequestParts};
use http::request::Parts;
use std::marker::PhantomData;

/// Extractor form of the authorization pipeline.
///
/// Listing `Authorized<P>` as a handler argument runs the full pipeline
/// before the handler body, parameterized by the permission marker `P`;
/// the body receives the decoded claim set and never sees the raw token.
pub(crate) struct Authorized<P: RequiredPermission> {
    pub claims: AccessClaims,
    _permission: PhantomData<P>,
}

impl<S, P> FromRequestParts<S> for Authorized<P>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    P: RequiredPermission,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let claims = authorize(&state, &parts.headers, P::NAME).await?;
        Ok(Self {
            claims,
            _permission: PhantomData,
        })
    }
}
