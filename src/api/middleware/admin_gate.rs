use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, HttpResponse,
};
use std::{
    future::{ready, Future, Ready},
    pin::Pin,
    rc::Rc,
};

/// Presence-only auth flag. This is a routing gate for the admin section,
/// not a security boundary: the cookie is never verified.
const AUTH_COOKIE: &str = "adminAuthenticated";

pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        let path = req.path();
        let is_admin_route = path.starts_with("/admin");
        let is_login_route = path == "/admin/login";
        let is_authenticated = req.cookie(AUTH_COOKIE).is_some();

        let redirect_to = if is_admin_route && !is_login_route && !is_authenticated {
            Some("/admin/login")
        } else if is_login_route && is_authenticated {
            Some("/admin/dashboard")
        } else {
            None
        };

        if let Some(target) = redirect_to {
            let (request, _) = req.into_parts();
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, target))
                .finish()
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
        }

        Box::pin(async move {
            let res = srv.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
