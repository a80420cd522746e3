//! Caller identity extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use makeready_core::{Caller, Principal};

/// Header carrying the authenticated principal token, set by the upstream
/// identity gateway. Requests arriving without it are anonymous.
pub const PRINCIPAL_HEADER: &str = "x-makeready-principal";

/// Extractor that resolves the caller's identity.
///
/// Never rejects: a missing or empty header resolves to
/// [`Caller::Anonymous`]. Handlers pass the caller explicitly into the
/// domain services, which decide what anonymous callers may do.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     CallerIdentity(caller): CallerIdentity,
/// ) -> impl IntoResponse {
///     match caller.principal() {
///         Some(p) => format!("Hello, {p}!"),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct CallerIdentity(pub Caller);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map_or(Caller::Anonymous, |token| {
                Caller::Authenticated(Principal::from(token))
            });

        Ok(Self(caller))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn resolve(request: Request<()>) -> Caller {
        let (mut parts, ()) = request.into_parts();
        let CallerIdentity(caller) = CallerIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        caller
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous() {
        let request = Request::builder().uri("/api/plans").body(()).unwrap();
        assert_eq!(resolve(request).await, Caller::Anonymous);
    }

    #[tokio::test]
    async fn test_empty_header_is_anonymous() {
        let request = Request::builder()
            .uri("/api/plans")
            .header(PRINCIPAL_HEADER, "  ")
            .body(())
            .unwrap();
        assert_eq!(resolve(request).await, Caller::Anonymous);
    }

    #[tokio::test]
    async fn test_header_resolves_principal() {
        let request = Request::builder()
            .uri("/api/properties")
            .header(PRINCIPAL_HEADER, "agent-b")
            .body(())
            .unwrap();
        assert_eq!(
            resolve(request).await,
            Caller::Authenticated(Principal::from("agent-b"))
        );
    }
}
