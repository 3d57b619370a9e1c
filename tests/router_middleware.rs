use flow_router_rs::{BoxHandler, Router};
use http::{Method, Request, Response, StatusCode};
use parking_lot::Mutex;
use std::sync::Arc;

type TestRouter = Router<(), String>;
type Trace = Arc<Mutex<String>>;

fn recording(
    trace: &Trace,
    id: &'static str,
) -> impl Fn(BoxHandler<(), String>) -> BoxHandler<(), String> + Send + Sync + 'static {
    let trace = trace.clone();
    move |next: BoxHandler<(), String>| -> BoxHandler<(), String> {
        let trace = trace.clone();
        Arc::new(move |request: Request<()>| {
            trace.lock().push_str(id);
            next.call(request)
        })
    }
}

fn empty_handler(_request: Request<()>) -> Response<String> {
    Response::new(String::new())
}

fn request(method: Method, path: &str) -> Request<()> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .expect("request should build")
}

#[test]
fn router_when_middleware_registered_then_runs_in_registration_order() {
    let trace: Trace = Arc::default();
    let router = TestRouter::new(None);
    router.use_middleware(recording(&trace, "1"));
    router.use_middleware(recording(&trace, "2"));
    router.get("/", empty_handler).expect("route should register");
    let service = router.seal();

    let response = service.dispatch(request(Method::GET, "/"));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(trace.lock().as_str(), "12");
}

#[test]
fn router_when_groups_nest_then_chains_accumulate() {
    let trace: Trace = Arc::default();
    let router = TestRouter::new(None);
    router.use_middleware(recording(&trace, "1"));
    router
        .group(|group| {
            group.use_middleware(recording(&trace, "2"));
            group.group(|nested| {
                nested.use_middleware(recording(&trace, "3"));
                nested.get("/nested/foo", empty_handler)
            })
        })
        .expect("group should register");
    let service = router.seal();

    let response = service.dispatch(request(Method::GET, "/nested/foo"));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(trace.lock().as_str(), "123");
}

#[test]
fn router_when_sibling_groups_exist_then_their_chains_are_isolated() {
    let trace: Trace = Arc::default();
    let router = TestRouter::new(None);
    router.use_middleware(recording(&trace, "A"));
    router
        .group(|left| {
            left.use_middleware(recording(&trace, "L"));
            left.get("/left", empty_handler)
        })
        .expect("left group should register");
    router
        .group(|right| {
            right.use_middleware(recording(&trace, "R"));
            right.get("/right", empty_handler)
        })
        .expect("right group should register");
    router.get("/root", empty_handler).expect("route should register");
    let service = router.seal();

    service.dispatch(request(Method::GET, "/left"));
    assert_eq!(trace.lock().as_str(), "AL");

    trace.lock().clear();
    service.dispatch(request(Method::GET, "/right"));
    assert_eq!(trace.lock().as_str(), "AR");

    trace.lock().clear();
    service.dispatch(request(Method::GET, "/root"));
    assert_eq!(trace.lock().as_str(), "A");
}

#[test]
fn router_when_middleware_added_after_route_then_earlier_route_is_unwrapped() {
    let trace: Trace = Arc::default();
    let router = TestRouter::new(None);
    router.get("/early", empty_handler).expect("route should register");
    router.use_middleware(recording(&trace, "late"));
    router.get("/later", empty_handler).expect("route should register");
    let service = router.seal();

    service.dispatch(request(Method::GET, "/early"));
    assert_eq!(trace.lock().as_str(), "");

    service.dispatch(request(Method::GET, "/later"));
    assert_eq!(trace.lock().as_str(), "late");
}

#[test]
fn router_when_group_routes_share_tree_then_root_sees_them() {
    let router = TestRouter::new(None);
    router
        .group(|group| group.post("/shared", empty_handler))
        .expect("group route should register");
    router.get("/shared", empty_handler).expect("route should register");
    let service = router.seal();

    let shared = &service.root().children()[0];
    assert_eq!(shared.literal(), "shared");
    assert_eq!(shared.methods().count(), 3);
}

#[test]
fn router_when_fallbacks_dispatched_then_root_chain_wraps_them() {
    let trace: Trace = Arc::default();
    let router = TestRouter::new(None);
    router.use_middleware(recording(&trace, "root"));
    router
        .group(|group| {
            group.use_middleware(recording(&trace, "group"));
            group.get("/only", empty_handler)
        })
        .expect("group should register");
    let service = router.seal();

    let missing = service.dispatch(request(Method::GET, "/missing"));
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(trace.lock().as_str(), "root");

    trace.lock().clear();
    let rejected = service.dispatch(request(Method::POST, "/only"));
    assert_eq!(rejected.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(trace.lock().as_str(), "root");
}

#[test]
fn router_when_middleware_short_circuits_then_handler_is_skipped() {
    let router = TestRouter::new(None);
    router.use_middleware(|_next: BoxHandler<(), String>| -> BoxHandler<(), String> {
        Arc::new(|_request: Request<()>| {
            let mut response = Response::new("denied".to_string());
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response
        })
    });
    router
        .get("/secret", |_request: Request<()>| {
            Response::new("secret".to_string())
        })
        .expect("route should register");
    let service = router.seal();

    let response = service.dispatch(request(Method::GET, "/secret"));
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.body(), "denied");
}
