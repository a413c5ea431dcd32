use std::net::SocketAddr;

use axum::Router;
use models::audit::AuditContext;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::AccountService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_memory().await?;
    let state = ServerState { accounts: AccountService::new(db, AuditContext::default()) };

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_account_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/api/create", app.base_url))
        .json(&json!({"name": "Jane Doe", "email": "jane@example.com", "mobileNumber": "5550001111"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.get(format!("{}/api/fetch", app.base_url))
        .query(&[("mobileNum", "5550001111")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let view = res.json::<serde_json::Value>().await?;
    assert_eq!(view["customer"]["name"], "Jane Doe");
    let number = view["account"]["accountNumber"].clone();

    let res = c.put(format!("{}/api/update", app.base_url))
        .json(&json!({
            "customer": {"name": "Jane Smith", "email": "jane@example.com", "mobileNumber": "5550001111"},
            "account": {"accountNumber": number, "accountType": "SAVINGS", "branchAddress": "22 Side Street, Austin"}
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.delete(format!("{}/api/delete", app.base_url))
        .query(&[("mobileNumber", "5550001111")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/fetch", app.base_url))
        .query(&[("mobileNum", "5550001111")])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
