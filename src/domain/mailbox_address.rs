use validator::Validate;

/// A well-formed address owned by the operator, such as the inbox contact messages go to.
#[derive(Debug, Clone, Validate, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct MailboxAddress {
    #[validate(email)]
    email: String,
}

impl AsRef<str> for MailboxAddress {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl TryFrom<String> for MailboxAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let address = Self { email: value };
        match address.validate() {
            Ok(_) => Ok(address),
            Err(_) => Err(format!("'{}' is not a valid mailbox address", address.email)),
        }
    }
}
