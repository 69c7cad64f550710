use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// One HTTP/1.1 response, ready to be written out.
#[derive(Debug)]
pub struct Response {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Response {
    /// A `200` page response.
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    /// A `200` JSON response.
    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into_bytes(),
        }
    }

    /// A `400` with a JSON error body.
    pub fn bad_request(detail: &str) -> Self {
        Self {
            status: 400,
            content_type: "application/json",
            body: error_body(detail),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "application/json",
            body: error_body("not found"),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            status: 405,
            content_type: "application/json",
            body: error_body("method not allowed"),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Writes the response, including the framing headers, to `tx`.
    ///
    /// # Arguments
    /// * `tx` - The connection's sending half.
    ///
    /// # Errors
    /// Returns an `io::Error` if the transport write fails.
    pub async fn write_to<W>(&self, tx: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let head = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: {}\r\ncontent-length: {}\r\n\r\n",
            self.status,
            reason(self.status),
            self.content_type,
            self.body.len(),
        );

        tx.write_all(head.as_bytes()).await?;
        tx.write_all(&self.body).await?;
        tx.flush().await
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Unknown",
    }
}

fn error_body(detail: &str) -> Vec<u8> {
    serde_json::json!({ "error": detail }).to_string().into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_framing_headers_and_body() {
        let mut out = Vec::new();
        Response::json("{\"rent\":1}".to_string())
            .write_to(&mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("content-length: 10\r\n"));
        assert!(text.ends_with("\r\n\r\n{\"rent\":1}"));
    }

    #[tokio::test]
    async fn error_responses_carry_a_json_detail() {
        let mut out = Vec::new();
        Response::bad_request("area must be between 300 and 5000, got 1")
            .write_to(&mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(text.contains("\"error\""));
    }
}
