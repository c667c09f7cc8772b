use reqwest::StatusCode;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{FormData, spawn_app, stored_recipient, valid_api_body};

#[tokio::test]
async fn new_recipient_page_renders_an_empty_create_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_new_recipient_page().await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Recipient register"));
    assert!(html.contains(r#"hx-post="/recipients""#));
    assert!(html.contains(r#"name="zip_code""#));
    assert!(html.contains(r#"pattern="[0-9]{5}-[0-9]{3}""#));
    assert!(html.contains(r#"maxlength="9""#));
    assert!(html.contains(r#"inputmode="numeric""#));
    assert!(!html.contains(r#"class="error""#));
}

#[tokio::test]
async fn edit_recipient_page_is_filled_with_the_stored_recipient() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/recipients/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_recipient()))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.get_edit_recipient_page("42").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"hx-post="/recipients/42""#));
    for value in [
        "Ursula",
        "Rua das Flores",
        "120",
        "apt 3",
        "Curitiba",
        "PR",
        "80010-000",
    ] {
        assert!(
            html.contains(&format!(r#"value="{}""#, value)),
            "The edit page is missing the stored value {}.",
            value
        );
    }
}

#[tokio::test]
async fn edit_recipient_page_returns_a_404_for_an_unknown_recipient() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.get_edit_recipient_page("42").await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = response.text().await.unwrap();
    assert!(html.contains("Could not load recipient."));
}

#[tokio::test]
async fn edit_recipient_page_returns_a_502_when_the_api_fails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.get_edit_recipient_page("42").await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn malformed_recipient_ids_are_rejected_with_a_400() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    // Act
    let page = app.get_edit_recipient_page("not%20an%20id").await;
    let update = app
        .post_recipient_update("not%20an%20id", &FormData::valid())
        .await;

    // Assert
    assert_eq!(page.status(), StatusCode::BAD_REQUEST);
    assert_eq!(update.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn new_recipient_is_created_and_the_form_is_reset() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/recipients"))
        .and(body_json(valid_api_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.post_new_recipient(&FormData::valid()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("HX-Redirect").is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains("Recipient created successfully!"));
    assert!(!html.contains(r#"value="Ursula""#));
}

#[tokio::test]
async fn complement_is_sent_when_filled_in() {
    // Arrange
    let app = spawn_app().await;
    let mut expected_body = valid_api_body();
    expected_body["complement"] = serde_json::json!("apt 3");

    Mock::given(method("POST"))
        .and(path("/recipients"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = FormData {
        complement: Some("apt 3"),
        ..FormData::valid()
    };

    // Act
    let response = app.post_new_recipient(&body).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn recipient_update_redirects_to_the_recipient_list() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("PUT"))
        .and(path("/recipients/42"))
        .and(body_json(valid_api_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.post_recipient_update("42", &FormData::valid()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("HX-Redirect")
            .and_then(|value| value.to_str().ok()),
        Some("/recipients")
    );
    let html = response.text().await.unwrap();
    assert!(html.contains("Recipient updated successfully!"));
}

#[tokio::test]
async fn submissions_with_missing_data_show_inline_errors() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;

    let test_cases = vec![
        (
            FormData {
                name: None,
                ..FormData::valid()
            },
            "Name is required",
            "missing name",
        ),
        (
            FormData {
                street: Some(""),
                ..FormData::valid()
            },
            "Street is required",
            "empty street",
        ),
        (
            FormData {
                number: Some("  "),
                ..FormData::valid()
            },
            "Number is required",
            "blank number",
        ),
        (
            FormData {
                city: None,
                ..FormData::valid()
            },
            "City is required",
            "missing city",
        ),
        (
            FormData {
                state: None,
                ..FormData::valid()
            },
            "State is required",
            "missing state",
        ),
        (
            FormData {
                zip_code: None,
                ..FormData::valid()
            },
            "Zip-code is required",
            "missing zip-code",
        ),
        (
            FormData {
                zip_code: Some("80010000"),
                ..FormData::valid()
            },
            "Zip-code must match 99999-999",
            "zip-code without hyphen",
        ),
    ];

    for (body, error_message, description) in test_cases {
        // Act
        let response = app.post_new_recipient(&body).await;

        // Assert
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "The form was not re-rendered when the payload had {}.",
            description
        );
        let html = response.text().await.unwrap();
        assert!(
            html.contains(error_message),
            "The form did not show {:?} when the payload had {}.",
            error_message,
            description
        );
    }
}

#[tokio::test]
async fn failed_save_keeps_the_values_and_shows_an_error() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.post_recipient_update("42", &FormData::valid()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get("HX-Redirect").is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains("Could not save recipient, please try again."));
    assert!(html.contains(r#"value="Ursula""#));
}

#[tokio::test]
async fn submitted_values_reach_the_api_trimmed() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/recipients"))
        .and(body_json(valid_api_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let body = FormData {
        name: Some("  Ursula "),
        street: Some(" Rua das Flores"),
        number: Some("120 "),
        complement: Some("   "),
        city: Some("\tCuritiba"),
        state: Some("PR  "),
        zip_code: Some(" 80010-000 "),
    };

    // Act
    let response = app.post_new_recipient(&body).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Recipient created successfully!"));
}

#[tokio::test]
async fn failed_create_keeps_the_values_and_shows_an_error() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/recipients"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    let response = app.post_new_recipient(&FormData::valid()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get("HX-Redirect").is_none());
    let html = response.text().await.unwrap();
    assert!(html.contains("Could not save recipient, please try again."));
    assert!(!html.contains("Recipient created successfully!"));
    for value in ["Ursula", "Rua das Flores", "120", "Curitiba", "PR", "80010-000"] {
        assert!(
            html.contains(&format!(r#"value="{}""#, value)),
            "The failed create dropped the submitted value {}.",
            value
        );
    }
}
