use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use std::fmt::Formatter;

use crate::domain::{ContactSubmission, SubmissionData};
use crate::email_client::{EmailClient, EmailClientError};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("failed to forward the message to the email provider")]
    DeliveryFailed(#[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            // Deployment-fixable, not a runtime fault: the caller cannot
            // retry their way out of a missing credential.
            ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::DeliveryFailed(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::ValidationError(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
            }
            ContactError::NotConfigured => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "Email service not configured. \
                        Set the provider authorization token to enable delivery.",
                    "message": "Your message was received but could not be sent. \
                        Please reach out directly.",
                }))
            }
            // The provider's own payload is never echoed back to the caller.
            ContactError::DeliveryFailed(_) => HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to send email" })),
            ContactError::UnexpectedError(e) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Failed to process your request",
                    "details": e.to_string(),
                }))
            }
        }
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(payload, email_client),
    fields(reply_to = tracing::field::Empty)
)]
pub async fn submit_contact(
    payload: web::Json<SubmissionData>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = payload
        .0
        .try_into()
        .map_err(ContactError::ValidationError)?;
    tracing::Span::current().record(
        "reply_to",
        &tracing::field::display(submission.reply_to.as_ref()),
    );

    let subject = format!("New Message from {}", submission.sender_label());
    let html_body = render_email_html(&submission);
    email_client
        .send_contact_email(&submission.reply_to, &subject, &html_body)
        .await
        .map_err(|e| match e {
            EmailClientError::MissingAuthorizationToken => ContactError::NotConfigured,
            EmailClientError::Request(e) => ContactError::DeliveryFailed(e),
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Email sent successfully!",
    })))
}

/// Render the notification email. User-supplied fields are entity-escaped;
/// the message lands in an HTML body and must not be interpreted as markup.
fn render_email_html(submission: &ContactSubmission) -> String {
    let sender = htmlescape::encode_minimal(submission.sender_label());
    let email = htmlescape::encode_minimal(submission.reply_to.as_ref());
    let message = htmlescape::encode_minimal(submission.body.as_ref());
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px;">
    <h2>New Contact Form Submission</h2>
    <p><strong>From:</strong> {sender}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Message:</strong></p>
    <p style="white-space: pre-wrap;">{message}</p>
    <hr style="margin-top: 20px; border: none; border-top: 1px solid #ddd;" />
    <p style="color: #666; font-size: 12px;">Reply directly to this email to respond.</p>
</div>"#,
        sender = sender,
        email = email,
        message = message
    )
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
