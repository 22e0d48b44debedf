#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, String> {
        if s.trim().is_empty() {
            Err("message must not be empty".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
