//! Request tracing middleware.
//!
//! Each incoming request receives a UUID `trace_id` held in task-local
//! storage while the handler runs. The identifier is echoed back in a
//! `trace-id` response header and attached to the access log line written
//! once the response is ready.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Wrap
//! work moved onto other tasks in [`TraceId::scope`] to keep the identifier.

use std::future::Future;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{info, warn};
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request trace identifier exposed via task-local storage.
///
/// # Examples
/// ```
/// use user_api::middleware::trace::TraceId;
///
/// async fn handler() {
///     if let Some(id) = TraceId::current() {
///         println!("trace id: {id}");
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the current trace identifier if one is in scope.
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Execute `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware that scopes a fresh [`TraceId`] around each request, adds the
/// `trace-id` header and logs the request outcome.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_api::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let method = req.method().to_string();
        let path = req.path().to_owned();
        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = fut.await?;
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    warn!(%error, %trace_id, "failed to encode trace identifier header");
                }
            }
            info!(
                %trace_id,
                %method,
                %path,
                status = res.status().as_u16(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "request completed"
            );
            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    #[tokio::test]
    async fn trace_id_current_reflects_scope() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn trace_id_current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[core::prelude::v1::test]
    fn trace_id_displays_as_uuid() {
        let trace_id = TraceId(Uuid::nil());
        assert_eq!(trace_id.to_string(), Uuid::nil().to_string());
    }

    #[actix_web::test]
    async fn handler_sees_the_header_trace_id() {
        let app = test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async move {
                let id = TraceId::current().expect("trace id in scope");
                HttpResponse::Ok().body(id.to_string())
            }),
        ))
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();
        let body = test::read_body(res).await;
        assert_eq!(header, std::str::from_utf8(&body).expect("utf8 body"));
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[actix_web::test]
    async fn header_is_added_to_error_responses() {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(|| async { HttpResponse::NotFound().finish() })),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert!(res.headers().contains_key(TRACE_ID_HEADER));
    }
}
