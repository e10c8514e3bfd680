use crate::domain::required_text::require;

/// The address a visitor typed into the contact form.
///
/// Only presence is checked. The value is forwarded to the provider as the sender without
/// any format validation, so a malformed address surfaces as a provider rejection.
#[derive(Debug)]
pub struct ContactEmail(String);

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<String>> for ContactEmail {
    type Error = String;
    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        require(value, "email").map(Self)
    }
}
