use blog_server::{AppConfig, Application};
use blog_shared::dto::{BlogPostListResponse, BlogPostResponse};
use serde_json::json;

#[actix_rt::test]
async fn serves_on_ephemeral_port_and_stops() {
    let app = Application::build(&AppConfig::local())
        .await
        .expect("building application");
    let server = app.start().expect("starting server");
    let base = format!("http://127.0.0.1:{}", server.port());
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/blogpost"))
        .json(&json!({
            "title": "Over the wire",
            "author": { "firstName": "Ada", "lastName": "Lovelace" },
            "content": "Hello"
        }))
        .send()
        .await
        .expect("POST /blogpost");
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let created: BlogPostResponse = res.json().await.unwrap();
    assert_eq!(created.author, "Ada Lovelace");

    let list: BlogPostListResponse = client
        .get(format!("{base}/blogpost"))
        .send()
        .await
        .expect("GET /blogpost")
        .json()
        .await
        .unwrap();
    assert_eq!(list.blogposts, vec![created]);

    server.stop().await.expect("stopping server");
}
