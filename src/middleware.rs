use crate::models::UserInfo;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::{ready, Ready};

/// Middleware that attaches the identity an upstream authenticator has
/// already validated.
///
/// The proxy in front of this service sets `X-User-Id` on every request it
/// lets through. Requests arriving without the header are forwarded without
/// an identity; handlers that require one report the missing attachment
/// themselves.
pub struct IdentityMiddleware;

impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService { service }))
    }
}

pub struct IdentityMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user_id = req
            .headers()
            .get("X-User-Id")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok());

        if let Some(id) = user_id {
            req.extensions_mut().insert(UserInfo { id });
        }

        self.service.call(req)
    }
}
