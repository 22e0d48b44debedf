pub mod contact_email;
pub mod contact_submission;
pub mod message_body;

pub use contact_email::ContactEmail;
pub use contact_submission::{ContactSubmission, SubmissionData};
pub use message_body::MessageBody;
