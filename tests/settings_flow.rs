mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use elf_visit::db::seed::SeedReport;
use serde_json::{json, Value};

#[tokio::test]
async fn test_settings_start_empty() {
    println!("\n\n[+] Running test: test_settings_start_empty");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let token = client.create_admin_session().await;

    let req = test::TestRequest::get()
        .uri("/api/admin/settings")
        .cookie(TestClient::session_cookie(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, Value::Null);
    println!("[/] Test passed: no settings row yet.");
}

#[tokio::test]
async fn test_settings_upsert() {
    println!("\n\n[+] Running test: test_settings_upsert");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let token = client.create_admin_session().await;

    println!("[>] Sending PUT /api/admin/settings with an empty body");
    let req = test::TestRequest::put()
        .uri("/api/admin/settings")
        .cookie(TestClient::session_cookie(&token))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let first: Value = test::read_body_json(resp).await;
    assert_eq!(first["id"], "main");
    assert_eq!(first["elfName"], "Sprinkles");
    assert_eq!(first["welcomeMessage"], "");
    assert_eq!(first["elfIntroVideoUrl"], Value::Null);

    println!("[>] Sending PUT /api/admin/settings again");
    let req = test::TestRequest::put()
        .uri("/api/admin/settings")
        .cookie(TestClient::session_cookie(&token))
        .set_json(json!({
            "elfName": "Jingles",
            "welcomeMessage": "Hi from the shelf!",
            "elfIntroVideoUrl": "https://video.example/intro.mp4"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let second: Value = test::read_body_json(resp).await;
    assert_eq!(second["id"], "main");
    assert_eq!(second["elfName"], "Jingles");
    assert_eq!(second["welcomeMessage"], "Hi from the shelf!");
    assert_eq!(second["elfIntroVideoUrl"], "https://video.example/intro.mp4");

    let stored = ctx.db.get_settings().await.unwrap().expect("settings row");
    assert_eq!(stored.elf_name, "Jingles");
    println!("[/] Test passed: single settings row updated in place.");
}

#[tokio::test]
async fn test_dashboard_counts() {
    println!("\n\n[+] Running test: test_dashboard_counts");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let token = client.create_admin_session().await;

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .cookie(TestClient::session_cookie(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let empty: Value = test::read_body_json(resp).await;
    assert_eq!(empty["postsCount"], 0);
    assert_eq!(empty["kidsCount"], 0);
    assert_eq!(empty["settings"], Value::Null);

    ctx.db.seed_defaults().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .cookie(TestClient::session_cookie(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let seeded: Value = test::read_body_json(resp).await;
    println!("[<] Dashboard after seeding: {}", seeded);
    assert_eq!(seeded["postsCount"], 1);
    assert_eq!(seeded["kidsCount"], 2);
    assert_eq!(seeded["settings"]["elfName"], "Sprinkles");
    println!("[/] Test passed: dashboard reflects stored rows.");
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    println!("\n\n[+] Running test: test_seed_is_idempotent");
    let ctx = TestContext::new().await;

    let first = ctx.db.seed_defaults().await.unwrap();
    assert_eq!(first, SeedReport { settings: true, kids: 2, posts: 1 });

    let second = ctx.db.seed_defaults().await.unwrap();
    assert_eq!(second, SeedReport::default());

    let kids = ctx.db.list_kids().await.unwrap();
    let names: Vec<&str> = kids.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, ["Aniyah", "Ellie"]);
    assert!(kids.iter().all(|k| k.nice_score == 100));

    let posts = ctx.db.list_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Sprinkles Has Arrived!");
    assert!(posts[0].is_published);
    println!("[/] Test passed: second seed run changed nothing.");
}
