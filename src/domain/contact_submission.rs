use crate::domain::contact_email::ContactEmail;
use crate::domain::message_body::MessageBody;

/// Raw request payload. Every field is optional so that missing keys reach
/// our own validation instead of being rejected by the deserializer.
#[derive(serde::Deserialize)]
pub struct SubmissionData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

pub struct ContactSubmission {
    pub name: Option<String>,
    pub reply_to: ContactEmail,
    pub body: MessageBody,
}

impl ContactSubmission {
    /// Label used in the email subject; falls back to the reply address when
    /// the submitter left the name field blank.
    pub fn sender_label(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.reply_to.as_ref(),
        }
    }
}

impl TryFrom<SubmissionData> for ContactSubmission {
    type Error = String;

    fn try_from(data: SubmissionData) -> Result<Self, Self::Error> {
        let email = data.email.unwrap_or_default();
        let message = data.message.unwrap_or_default();
        // Presence is checked for both fields before the email shape so that
        // an incomplete payload always reads as "missing", never "malformed".
        if email.is_empty() || message.trim().is_empty() {
            return Err("Missing required fields".to_string());
        }
        let reply_to =
            ContactEmail::parse(email).map_err(|_| "Invalid email format".to_string())?;
        let body = MessageBody::parse(message)?;
        Ok(Self {
            name: data.name,
            reply_to,
            body,
        })
    }
}
