use crate::domain::required_text::require;

#[derive(Debug)]
pub struct ContactName(String);

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<String>> for ContactName {
    type Error = String;
    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        require(value, "name").map(Self)
    }
}
