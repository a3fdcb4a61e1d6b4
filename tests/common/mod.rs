//! Local stand-in for the catalog API, served over real HTTP.
//!
//! Routes under `/products` answer like the live API; a few ids are wired
//! to failure modes (404, 400, 500, malformed body, slow response).
//! `/empty/products` and `/object/products` return an empty list and a
//! non-list document.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};

/// How long the slow endpoint stalls before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

pub fn product(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "price": 12.5,
        "category": {"id": 1, "name": "Clothes", "image": "https://i.imgur.com/QkIa5tT.jpeg"},
        "description": "A comfortable everyday piece built to last through many seasons.",
        "images": []
    })
}

fn app() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/empty/products", get(|| async { Json(json!([])) }))
        .route("/object/products", get(|| async { Json(json!({"products": []})) }))
}

async fn list_products() -> Json<Value> {
    Json(json!([product(1), product(2), {"id": 3, "title": "Broken"}]))
}

async fn get_product(Path(id): Path<String>) -> axum::response::Response {
    match id.as_str() {
        "400" => StatusCode::BAD_REQUEST.into_response(),
        "500" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "666" => "<html>definitely not json</html>".into_response(),
        "667" => Json(json!({"id": 667, "title": "No category", "price": 1, "description": "d"}))
            .into_response(),
        "777" => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(product(777)).into_response()
        }
        other => match other.parse::<u64>() {
            Ok(n) if (1..=50).contains(&n) => Json(product(n)).into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

/// Start the mock server on a random port and return its address.
pub fn start() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
        .unwrap();
    });

    addr
}

/// An address nothing is listening on.
pub fn dead_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
