use crate::domain::errors::ValidationError;

/// A visitor submission that passed validation: every field is trimmed and
/// free of NUL bytes, `name` and `content` are non-empty and `email` contains
/// an `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePostSubmission {
    name: String,
    email: String,
    content: String,
}

impl TimelinePostSubmission {
    /// Checks run in field order; the first failure is the one reported.
    pub fn parse(name: &str, email: &str, content: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        let content = content.trim();

        // Postgres TEXT cannot hold NUL.
        if name.is_empty() || name.contains('\0') {
            return Err(ValidationError::InvalidName);
        }
        if email.is_empty() || !email.contains('@') || email.contains('\0') {
            return Err(ValidationError::InvalidEmail);
        }
        if content.is_empty() || content.contains('\0') {
            return Err(ValidationError::InvalidContent);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            content: content.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.name, self.email, self.content)
    }
}
