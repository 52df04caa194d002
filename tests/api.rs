use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use inventory_visibility::domain::seed::{default_products, parse_products};
use inventory_visibility::{api, Inventory, InventoryService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let inventory = Inventory::new(default_products()).unwrap();
    api::app(InventoryService::new(inventory), None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request.header(header::CONTENT_TYPE, "application/json").body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

async fn get(app: &Router, uri: &str) -> Value {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {uri} -> {body}");
    body
}

#[tokio::test]
async fn health() {
    let body = get(&app(), "/health").await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn seeded_sku_is_served_verbatim() {
    let seed = r#"[{"id":"A-1","name":"Gear","sku":" abc-1 ","warehouse":"X","stock":3,"demand":4}]"#;
    let inventory = Inventory::new(parse_products(seed).unwrap()).unwrap();
    let app = api::app(InventoryService::new(inventory), None);
    assert_eq!(get(&app, "/api/v1/products/A-1").await["sku"], " abc-1 ");
}

#[tokio::test]
async fn products_search_is_case_insensitive() {
    let body = get(&app(), "/api/v1/products?search=hex").await;
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["nodes"][0]["name"], "12mm Hex Bolt");
    assert_eq!(body["nodes"][0]["status"], "HEALTHY");
}

#[tokio::test]
async fn products_offset_past_end_is_empty() {
    let body = get(&app(), "/api/v1/products?offset=10&limit=10").await;
    assert_eq!(body, json!({ "nodes": [], "totalCount": 4 }));
}

#[tokio::test]
async fn products_negative_paging_degrades_instead_of_failing() {
    let app = app();
    let body = get(&app, "/api/v1/products?offset=-1").await;
    assert_eq!(body["totalCount"], 4);
    assert_eq!(body["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(body["nodes"][0]["id"], "P-1001");

    let body = get(&app, "/api/v1/products?limit=-1").await;
    assert_eq!(body, json!({ "nodes": [], "totalCount": 4 }));

    let body = get(&app, "/api/v1/products?limit=0&search=hex").await;
    assert_eq!(body, json!({ "nodes": [], "totalCount": 1 }));
}

#[tokio::test]
async fn products_filters_and_empty_selections() {
    let app = app();
    let critical = get(&app, "/api/v1/products?status=CRITICAL").await;
    assert_eq!(critical["totalCount"], 2);

    let blr = get(&app, "/api/v1/products?warehouse=BLR-A&limit=1").await;
    assert_eq!(blr["totalCount"], 2);
    assert_eq!(blr["nodes"].as_array().unwrap().len(), 1);

    let all = get(&app, "/api/v1/products?warehouse=&status=&search=").await;
    assert_eq!(all["totalCount"], 4);

    let (status, _) = send(&app, Method::GET, "/api/v1/products?status=STALE", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_lookup_returns_null_when_missing() {
    let app = app();
    assert_eq!(get(&app, "/api/v1/products/P-1003").await["status"], "LOW");
    assert_eq!(get(&app, "/api/v1/products/P-0000").await, Value::Null);
}

#[tokio::test]
async fn warehouses_totals_and_kpis() {
    let app = app();
    assert_eq!(get(&app, "/api/v1/warehouses").await, json!(["BLR-A", "DEL-B", "PNQ-C"]));

    let totals = get(&app, "/api/v1/totals").await;
    assert_eq!(totals["totalStock"], 334);
    assert_eq!(totals["totalDemand"], 400);
    assert!((totals["fillRate"].as_f64().unwrap() - 68.5).abs() < 1e-9);

    let kpis = get(&app, "/api/v1/kpis?range=14").await;
    assert_eq!(kpis.as_array().unwrap().len(), 14);
    assert_eq!(kpis, get(&app, "/api/v1/kpis?range=14").await);
    assert_eq!(get(&app, "/api/v1/kpis").await.as_array().unwrap().len(), 7);
    assert_eq!(get(&app, "/api/v1/kpis?range=500").await.as_array().unwrap().len(), 90);
}

#[tokio::test]
async fn update_demand_clamps_and_reports_status() {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/api/v1/products/P-1002/demand", Some(json!({ "demand": -5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["demand"], 0);
    assert_eq!(body["status"], "HEALTHY");

    let (status, body) = send(&app, Method::PUT, "/api/v1/products/P-9999/demand", Some(json!({ "demand": 5 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("P-9999"));
}

#[tokio::test]
async fn transfer_creates_target_and_conserves_stock() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/v1/products/P-1001/transfer", Some(json!({ "toWarehouse": "PNQ-X", "amount": 50 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["stock"], 130);
    assert_eq!(body[1]["warehouse"], "PNQ-X");
    assert_eq!(body[1]["stock"], 50);
    assert_eq!(body[1]["demand"], 120);
    assert_eq!(body[1]["sku"], "HEX-12-100");

    assert_eq!(get(&app, "/api/v1/products").await["totalCount"], 5);
    assert_eq!(get(&app, "/api/v1/totals").await["totalStock"], 334);
}

#[tokio::test]
async fn transfer_rejections_leave_store_untouched() {
    let app = app();
    let (status, _) = send(&app, Method::POST, "/api/v1/products/P-1004/transfer", Some(json!({ "toWarehouse": "BLR-A", "amount": 30 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(get(&app, "/api/v1/products/P-1004").await["stock"], 24);

    let (status, _) = send(&app, Method::POST, "/api/v1/products/nope/transfer", Some(json!({ "toWarehouse": "BLR-A", "amount": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, "/api/v1/products/P-1001/transfer", Some(json!({ "toWarehouse": "PNQ-C", "amount": 0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["stock"], 180);
    assert_eq!(get(&app, "/api/v1/products").await["totalCount"], 4);
}
