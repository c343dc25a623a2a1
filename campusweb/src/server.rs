//! Lab server assembly.
//!
//! Mounts every lab under its route prefix on one listener, serves the
//! index page, and installs the request-tracking middleware: each request
//! is logged with a running visit count before it is dispatched.
//!
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::{config::CONFIG, html::INDEX_PAGE, labs};

/// Process-wide visit counter. Relaxed and illustrative only; nothing
/// reads it besides the request log.
static VISITS: AtomicUsize = AtomicUsize::new(0);

/// Start the lab web server
pub async fn run() {
    let app = Router::new()
        .route("/", get(index_page))
        .nest("/marks", labs::marks::router())
        .nest("/attendance", labs::attendance::router())
        .nest("/faculty", labs::faculty::router())
        .nest("/fees", labs::fees::router())
        .nest("/placement", labs::placement::router())
        .nest("/grades", labs::grades::router())
        .nest("/branches", labs::branches::router())
        .nest("/tools", labs::tools::router())
        .layer(middleware::from_fn(track_request));

    let addr = format!("0.0.0.0:{}", CONFIG.web_port);
    println!("🌐 Lab server at http://localhost:{}/", CONFIG.web_port);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Log every request and bump the visit counter
async fn track_request(req: Request, next: Next) -> Response {
    let visits = VISITS.fetch_add(1, Ordering::Relaxed) + 1;
    println!("[visit {visits}] {} {}", req.method(), req.uri().path());
    next.run(req).await
}

/// Display the lab index page
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
