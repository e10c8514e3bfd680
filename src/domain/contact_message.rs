use crate::domain::required_text::require;

#[derive(Debug)]
pub struct ContactMessage(String);

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<String>> for ContactMessage {
    type Error = String;
    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        require(value, "message").map(Self)
    }
}
