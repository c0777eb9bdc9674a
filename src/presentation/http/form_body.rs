use poem::{
    Body, Request, Result,
    http::{Method, header, header::HeaderValue},
};

const SUBMIT_PATH: &str = "/api/timeline_post";
const FORM_TYPES: [&str; 2] = ["application/x-www-form-urlencoded", "multipart/form-data"];

/// Submissions without a form body (no `Content-Type`, JSON, plain text...)
/// are read as an empty form, so they reach validation instead of failing
/// payload parsing.
pub async fn default_form_body(mut req: Request) -> Result<Request> {
    if *req.method() != Method::POST || req.uri().path() != SUBMIT_PATH {
        return Ok(req);
    }

    if !is_form(req.headers().get(header::CONTENT_TYPE)) {
        let headers = req.headers_mut();
        headers.remove(header::CONTENT_LENGTH);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(FORM_TYPES[0]),
        );
        req.set_body(Body::empty());
    }

    Ok(req)
}

fn is_form(content_type: Option<&HeaderValue>) -> bool {
    let Some(essence) = content_type
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
    else {
        return false;
    };

    let essence = essence.trim();
    FORM_TYPES
        .iter()
        .any(|form_type| essence.eq_ignore_ascii_case(form_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_form_content_types() {
        for value in [
            "application/x-www-form-urlencoded",
            "application/x-www-form-urlencoded; charset=UTF-8",
            "Multipart/Form-Data; boundary=xyz",
        ] {
            assert!(is_form(Some(&HeaderValue::from_static(value))), "{value}");
        }
    }

    #[test]
    fn other_content_types_are_not_forms() {
        assert!(!is_form(None));
        assert!(!is_form(Some(&HeaderValue::from_static("application/json"))));
        assert!(!is_form(Some(&HeaderValue::from_static("text/plain"))));
    }

    #[tokio::test]
    async fn non_form_submission_becomes_empty_form() {
        let req = Request::builder()
            .method(Method::POST)
            .uri_str(SUBMIT_PATH)
            .content_type("application/json")
            .body(r#"{"name":"Ada"}"#);

        let mut req = default_form_body(req).await.unwrap();

        assert_eq!(
            req.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert!(req.take_body().into_vec().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_routes_are_untouched() {
        let req = Request::builder()
            .method(Method::POST)
            .uri_str("/api/health")
            .content_type("application/json")
            .body("{}");

        let req = default_form_body(req).await.unwrap();

        assert_eq!(
            req.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
