use poem_openapi::{ApiRequest, Multipart, Object, payload::Form};
use serde::Deserialize;

/// Url-encoded submission. Absent fields read as empty and fail validation.
#[derive(Object, Deserialize, Debug)]
pub struct TimelinePostFormDto {
    #[oai(default)]
    #[serde(default)]
    pub name: String,
    #[oai(default)]
    #[serde(default)]
    pub email: String,
    #[oai(default)]
    #[serde(default)]
    pub content: String,
}

#[derive(Multipart, Debug)]
pub struct TimelinePostMultipartDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
}

#[derive(ApiRequest, Debug)]
pub enum TimelinePostRequestDto {
    Form(Form<TimelinePostFormDto>),
    Multipart(TimelinePostMultipartDto),
}

impl TimelinePostRequestDto {
    /// `(name, email, content)` with absent fields as empty strings.
    pub fn into_fields(self) -> (String, String, String) {
        match self {
            TimelinePostRequestDto::Form(Form(form)) => (form.name, form.email, form.content),
            TimelinePostRequestDto::Multipart(form) => (
                form.name.unwrap_or_default(),
                form.email.unwrap_or_default(),
                form.content.unwrap_or_default(),
            ),
        }
    }
}
