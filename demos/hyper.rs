use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use segtree_router::Router;
use tokio::net::TcpListener;
use tower::service_fn;
use tower::util::BoxCloneService;
use tower::Service as _;

type Body = Full<Bytes>;

// We can use `BoxCloneService` to erase the type of each handler service.
//
// We still need a `Mutex` around each service because `BoxCloneService` doesn't
// require the service to implement `Sync`.
type Service = Mutex<BoxCloneService<Request<Incoming>, Response<Body>, hyper::Error>>;

// The parameters bound by the matched route, handed to the handler through the
// request extensions.
#[derive(Clone, Debug, Default)]
struct PathParams(HashMap<String, String>);

impl PathParams {
    fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }
}

fn params(req: &Request<Incoming>) -> PathParams {
    req.extensions().get::<PathParams>().cloned().unwrap_or_default()
}

// GET /
async fn index(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /users/:id
async fn user(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let params = params(&req);
    Ok(Response::new(Body::from(format!("user {}", params.get("id")))))
}

// GET /posts/:slug([a-z0-9-]+)
async fn post(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let params = params(&req);
    Ok(Response::new(Body::from(format!("post {}", params.get("slug")))))
}

// GET /static/*
async fn assets(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from(format!("asset {}", req.uri().path()))))
}

// 404 handler
fn not_found() -> Response<Body> {
    let mut res = Response::new(Body::default());
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

fn handler<F, R>(f: F) -> Service
where
    F: Fn(Request<Incoming>) -> R + Clone + Send + 'static,
    R: Future<Output = hyper::Result<Response<Body>>> + Send + 'static,
{
    Mutex::new(BoxCloneService::new(service_fn(f)))
}

async fn route(router: Arc<Router<Service>>, mut req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    // find the node for this request method and path
    let found = match router.find_route(&method, &path) {
        Ok(found) => found,
        Err(_) => return Ok(not_found()),
    };

    // a path that only names an intermediate node has no handler
    let service = match found.handler() {
        Some(service) => service,
        None => return Ok(not_found()),
    };

    let params = found
        .params
        .iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
    req.extensions_mut().insert(PathParams(params));

    // lock the service for a very short time, just to clone the service
    let mut service = service
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    service.call(req).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Create a router and register our routes. Registration errors are
    // configuration mistakes, so they abort startup.
    let mut router = Router::new();
    router.get("/", handler(index))?;
    router.get("/users/:id", handler(user))?;
    router.get(r"/posts/:slug([a-z0-9-]+)", handler(post))?;
    router.get("/static/*", handler(assets))?;

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;
    log::info!("listening on {}", listener.local_addr()?);

    // boilerplate for the hyper service
    let router = Arc::new(router);

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| route(router.clone(), request)),
                )
                .await
            {
                log::error!("error serving connection: {:?}", err);
            }
        });
    }
}
