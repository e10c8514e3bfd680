use crate::domain::{ContactEmail, ContactMessage, ContactName, EmailMessage, MailboxAddress};
use crate::routes::ContactFormData;

#[derive(Debug)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// The notification sent to `recipient`, written on behalf of the visitor.
    pub fn to_email(&self, recipient: &MailboxAddress) -> EmailMessage {
        EmailMessage {
            from: self.email.as_ref().to_owned(),
            to: recipient.as_ref().to_owned(),
            subject: format!("Message from {}", self.name.as_ref()),
            body: self.message.as_ref().to_owned(),
        }
    }
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::try_from(form.name)?;
        let email = ContactEmail::try_from(form.email)?;
        let message = ContactMessage::try_from(form.message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}
