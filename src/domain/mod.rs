mod contact_email;
mod contact_message;
mod contact_name;
mod contact_submission;
mod email_message;
mod mailbox_address;
mod required_text;

pub use contact_email::ContactEmail;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_submission::ContactSubmission;
pub use email_message::EmailMessage;
pub use mailbox_address::MailboxAddress;
