use crate::EmailClient;
use crate::domain::ContactSubmission;
use crate::email_client::DispatchError;
use crate::startup::ContactRecipient;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, post, web};

const SENT: &str = "Message sent successfully!";
const FIELDS_REQUIRED: &str = "All fields are required.";
const INVALID_BODY: &str = "Invalid request body.";
const SEND_FAILED: &str = "Failed to send message.";

/// Contact form body as received. Absent or `null` fields deserialize to `None`
/// and are rejected during validation rather than here.
#[derive(serde::Deserialize)]
pub struct ContactFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
struct Acknowledgement {
    message: &'static str,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to parse the contact form: {0}")]
    MalformedRequest(String),
    #[error("Failed to send the contact message")]
    DispatchError(#[source] DispatchError),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) | ContactError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Only fixed text reaches the caller; the cause stays in the logs.
        let message = match self {
            ContactError::ValidationError(_) => FIELDS_REQUIRED,
            ContactError::MalformedRequest(_) => INVALID_BODY,
            ContactError::DispatchError(_) => SEND_FAILED,
        };
        HttpResponse::build(self.status_code()).json(Acknowledgement { message })
    }
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

/// Routes body deserialization failures through `ContactError` so they share its JSON shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ContactError::MalformedRequest(err.to_string()).into())
}

#[tracing::instrument(
    name = "Relaying a contact message",
    skip(body, email_client, recipient),
    fields(sender_email = tracing::field::Empty, sender_name = tracing::field::Empty)
)]
#[post("/contact")]
pub async fn submit_contact(
    body: web::Json<ContactFormData>,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<ContactRecipient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission =
        body.into_inner().try_into().map_err(ContactError::ValidationError)?;
    let span = tracing::Span::current();
    span.record("sender_email", tracing::field::display(submission.email.as_ref()));
    span.record("sender_name", tracing::field::display(submission.name.as_ref()));

    let message = submission.to_email(&recipient.0);
    // The request span reports the failure and its cause chain through `TracingLogger`.
    email_client
        .send_email(&message)
        .await
        .map_err(ContactError::DispatchError)?;

    Ok(HttpResponse::Ok().json(Acknowledgement { message: SENT }))
}
