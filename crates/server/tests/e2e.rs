use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::fixtures::seed_reference_catalog;
use service::repo::InMemoryCatalog;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

/// Boot the router on an ephemeral port over a freshly seeded in-memory catalogue.
async fn start_server() -> anyhow::Result<TestApp> {
    let catalog = Arc::new(InMemoryCatalog::default());
    seed_reference_catalog(catalog.as_ref(), catalog.as_ref()).await?;

    let app = routes::build_router(AppState::from_catalog(catalog), CorsLayer::very_permissive(), None);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

async fn first_supplier_id(app: &TestApp) -> anyhow::Result<String> {
    let body: Value = client().get(app.url("/api/suppliers")).send().await?.json().await?;
    Ok(body["data"][0]["id"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "OK");
    Ok(())
}

#[tokio::test]
async fn e2e_summary_matches_reference_fixture() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body: Value = client().get(app.url("/api/analytics/summary")).send().await?.json().await?;
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["totalSuppliers"], 3);
    assert_eq!(data["totalProducts"], 6);
    assert_eq!(data["outOfStockCount"], 0);
    assert_eq!(data["activeCertificationsCount"], 4);

    let by_category = data["productsByCategory"].as_array().cloned().unwrap_or_default();
    let count_of = |cat: &str| {
        by_category
            .iter()
            .find(|c| c["category"] == cat)
            .and_then(|c| c["count"].as_u64())
    };
    assert_eq!(count_of("ORGANIC_FOOD"), Some(2));
    assert_eq!(count_of("HANDMADE"), Some(1));
    assert_eq!(count_of("SUSTAINABLE_GOODS"), Some(3));
    Ok(())
}

#[tokio::test]
async fn e2e_search_organic() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/search")).query(&[("q", "organic")]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["count"], 2);
    let hits = body["data"].as_array().cloned().unwrap_or_default();
    assert!(hits.iter().all(|h| h["type"] == "product"));
    let mut names: Vec<_> = hits.iter().filter_map(|h| h["name"].as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Organic Basmati Rice", "Organic Turmeric Powder"]);
    assert_eq!(hits[0]["additionalInfo"]["supplierName"], "Green Farms Co.");
    Ok(())
}

#[tokio::test]
async fn e2e_search_without_match_is_empty() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body: Value = client().get(app.url("/api/search?q=xyzzy")).send().await?.json().await?;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_search_requires_q() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/api/search", "/api/search?q="] {
        let res = client().get(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
        let body: Value = res.json().await?;
        assert_eq!(body["message"], "Search query parameter \"q\" is required");
        assert_eq!(body["statusCode"], 400);
        assert!(body.get("data").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_query_strings_use_error_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/api/search?q=rice&q=bag", "/api/products?category=HANDMADE&category=ORGANIC_FOOD"] {
        let res = client().get(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
        let body: Value = res.json().await?;
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["details"][0]["field"], "query");
    }
    Ok(())
}

#[tokio::test]
async fn e2e_supplier_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let payload = json!({
        "name": "Andes Alpaca Works",
        "email": "hola@andes.example",
        "country": "Peru",
        "contactPerson": "Lucia Quispe"
    });
    let res = client().post(app.url("/api/suppliers")).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["message"], "Supplier created successfully");
    let id = created["data"]["id"].as_str().unwrap_or_default().to_string();

    let dup = client().post(app.url("/api/suppliers")).json(&payload).send().await?;
    assert_eq!(dup.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(dup.json::<Value>().await?["message"], "Email already exists");

    let res = client().get(app.url(&format!("/api/suppliers/{}", id))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["contactPerson"], "Lucia Quispe");
    assert_eq!(body["data"]["products"], json!([]));

    let list: Value = client().get(app.url("/api/suppliers")).send().await?.json().await?;
    assert_eq!(list["count"], 4);
    Ok(())
}

#[tokio::test]
async fn e2e_validation_errors_carry_details() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(app.url("/api/suppliers"))
        .json(&json!({ "name": "", "email": "nope", "country": "Kenya" }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["message"], "Invalid request data");
    let fields: Vec<_> = body["details"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|d| d["field"].as_str().map(str::to_string))
        .collect();
    assert_eq!(fields, vec!["name", "email"]);

    let res = client().get(app.url("/api/suppliers/not-a-uuid")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = client().get(app.url("/api/products?category=FOOD")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_missing_records_are_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ghost = uuid::Uuid::new_v4();

    let res = client().get(app.url(&format!("/api/suppliers/{}", ghost))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "Supplier not found");

    let res = client().delete(app.url(&format!("/api/products/{}", ghost))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "Product not found");

    let res = client()
        .post(app.url("/api/products"))
        .json(&json!({
            "supplierId": ghost,
            "name": "Phantom Tea",
            "category": "ORGANIC_FOOD",
            "price": 3.5,
            "stockQuantity": 10,
            "certificationStatus": "PENDING"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["message"], "Supplier not found");
    Ok(())
}

#[tokio::test]
async fn e2e_product_lifecycle_and_filters() -> anyhow::Result<()> {
    let app = start_server().await?;
    let supplier_id = first_supplier_id(&app).await?;

    let res = client()
        .post(app.url("/api/products"))
        .json(&json!({
            "supplierId": supplier_id,
            "name": "Coconut Coir Mats",
            "category": "HANDMADE",
            "price": 19.0,
            "stockQuantity": 0,
            "certificationStatus": "PENDING",
            "certificationExpiryDate": "2027-01-01T00:00:00Z"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["data"]["supplier"]["id"], supplier_id.as_str());
    let id = created["data"]["id"].as_str().unwrap_or_default().to_string();

    let handmade: Value = client()
        .get(app.url("/api/products"))
        .query(&[("category", "HANDMADE"), ("certificationStatus", "PENDING")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(handmade["count"], 2);
    assert_eq!(handmade["data"][0]["id"], id.as_str());
    assert!(handmade["data"][0]["supplier"].get("email").is_some());

    let summary: Value = client().get(app.url("/api/analytics/summary")).send().await?.json().await?;
    assert_eq!(summary["data"]["outOfStockCount"], 1);

    let res = client()
        .put(app.url(&format!("/api/products/{}", id)))
        .json(&json!({ "stockQuantity": 25, "certificationExpiryDate": null }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["message"], "Product updated successfully");
    assert_eq!(updated["data"]["stockQuantity"], 25);
    assert_eq!(updated["data"]["certificationExpiryDate"], Value::Null);
    assert_eq!(updated["data"]["name"], "Coconut Coir Mats");

    let res = client().delete(app.url(&format!("/api/products/{}", id))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Product deleted successfully");
    assert!(body.get("data").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_metrics_exposed() -> anyhow::Result<()> {
    let app = start_server().await?;
    client().get(app.url("/api/search?q=rice")).send().await?;
    let text = client().get(app.url("/metrics")).send().await?.text().await?;
    assert!(text.contains("greentrade_search_requests_total"));
    assert!(text.contains("greentrade_http_requests_total"));
    Ok(())
}
