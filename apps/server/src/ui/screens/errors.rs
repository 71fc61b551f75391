use axum::http::StatusCode;

use crate::ui::{escape, page};

/// Statuses that get their own rendered page
pub const RENDERED: [StatusCode; 8] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::METHOD_NOT_ALLOWED,
    StatusCode::CONFLICT,
    StatusCode::UNPROCESSABLE_ENTITY,
    StatusCode::INTERNAL_SERVER_ERROR,
];

fn explanation(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "The request could not be understood.",
        StatusCode::UNAUTHORIZED => "You need to sign in to see this page.",
        StatusCode::FORBIDDEN => "You are not allowed to see this page.",
        StatusCode::NOT_FOUND => "The page you are looking for does not exist.",
        StatusCode::METHOD_NOT_ALLOWED => "That method is not allowed here.",
        StatusCode::CONFLICT => "The request conflicts with the current state of the directory.",
        StatusCode::UNPROCESSABLE_ENTITY => "The submitted data could not be processed.",
        _ => "Something went wrong on our end. Please try again later.",
    }
}

pub fn render(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<h1>{code} {reason}</h1>
<p>{explanation}</p>
<p><a href="/">Back to the home page</a></p>"#,
        code = status.as_u16(),
        reason = escape(reason),
        explanation = explanation(status),
    );
    page(reason, None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_status() {
        for status in RENDERED {
            let html = render(status);
            assert!(html.contains(&format!("<h1>{} ", status.as_u16())));
        }
        assert!(render(StatusCode::NOT_FOUND).contains("404 Not Found"));
    }
}
