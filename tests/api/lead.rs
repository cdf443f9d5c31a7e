use std::time::Duration;

use crate::helpers::{
    spawn_app, spawn_app_with, valid_lead_body, when_relaying_a_lead, TestApp, TestAppOptions,
};
use wiremock::matchers::{any, body_partial_json, header};
use wiremock::{Mock, ResponseTemplate};

async fn analytics_requests_received(app: &TestApp) -> usize {
    for _ in 0..50 {
        let received = app
            .analytics_server
            .received_requests()
            .await
            .unwrap_or_default();
        if !received.is_empty() {
            return received.len();
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    0
}

#[tokio::test]
async fn a_valid_lead_is_relayed_and_acknowledged() {
    // Arrange
    let app = spawn_app().await;
    when_relaying_a_lead()
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "firstName": "Mike",
            "lastName": "R",
            "email": "mike@example.com",
            "phone": "5551234567",
            "message": "",
            "formType": "tour",
            "_subject": "New tour Request from Mike R"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    let response = app.post_lead(&valid_lead_body("tour")).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "Form submitted successfully", "success": true })
    );
}

#[tokio::test]
async fn a_missing_form_type_is_relayed_as_contact() {
    let app = spawn_app().await;
    when_relaying_a_lead()
        .and(body_partial_json(serde_json::json!({ "formType": "contact" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let mut body = valid_lead_body("tour");
    body.as_object_mut().unwrap().remove("formType");
    body.as_object_mut().unwrap().remove("message");
    let response = app.post_lead(&body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn missing_required_fields_are_rejected_with_400() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;
    let test_cases = ["firstName", "lastName", "email", "phone"];

    for missing in test_cases {
        let mut body = valid_lead_body("contact");
        body.as_object_mut().unwrap().remove(missing);

        // Act
        let response = app.post_lead(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was missing.",
            missing
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Missing required fields");
    }
}

#[tokio::test]
async fn blank_required_fields_are_rejected_with_400() {
    let app = spawn_app().await;
    let mut body = valid_lead_body("contact");
    body["phone"] = serde_json::json!("   ");

    let response = app.post_lead(&body).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn relay_failures_are_logged_and_reported_as_success() {
    // Arrange
    let app = spawn_app().await;
    when_relaying_a_lead()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    let response = app.post_lead(&valid_lead_body("tour")).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn leads_failing_stricter_validation_are_not_relayed_but_acknowledged() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;
    let mut body = valid_lead_body("contact");
    body["email"] = serde_json::json!("mike-at-example.com");

    let response = app.post_lead(&body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn relay_failures_are_surfaced_when_configured() {
    // Arrange
    let app = spawn_app_with(TestAppOptions {
        surface_failures: true,
        ..Default::default()
    })
    .await;
    when_relaying_a_lead()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    let response = app.post_lead(&valid_lead_body("tour")).await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "message": "Lead could not be delivered", "success": false })
    );
}

#[tokio::test]
async fn other_methods_are_rejected_with_405() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/api/lead", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn a_relayed_lead_is_reported_to_analytics() {
    let app = spawn_app().await;
    when_relaying_a_lead()
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.relay_server)
        .await;
    Mock::given(body_partial_json(serde_json::json!({
        "events": [{ "name": "generate_lead", "params": { "form_type": "tour" } }]
    })))
    .respond_with(ResponseTemplate::new(204))
    .mount(&app.analytics_server)
    .await;

    let response = app.post_lead(&valid_lead_body("tour")).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(1, analytics_requests_received(&app).await);
}

#[tokio::test]
async fn analytics_failures_do_not_affect_the_response() {
    let app = spawn_app().await;
    when_relaying_a_lead()
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.relay_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.analytics_server)
        .await;

    let response = app.post_lead(&valid_lead_body("contact")).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn nothing_is_reported_to_analytics_when_the_relay_fails() {
    let app = spawn_app().await;
    when_relaying_a_lead()
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.relay_server)
        .await;

    let response = app.post_lead(&valid_lead_body("tour")).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(0, analytics_requests_received(&app).await);
}
