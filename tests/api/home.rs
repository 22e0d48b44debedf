use crate::helpers::spawn_app;

#[tokio::test]
async fn home_page_serves_the_contact_form() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="message""#));
    assert!(html.contains("/api/contact"));
    assert!(html.contains("Message sent successfully! I'll get back to you soon."));
}
