use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use super::{MAX_BODY, MAX_HEAD};

/// The request methods the service routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One parsed HTTP/1.1 request.
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub target: String,
    pub body: Vec<u8>,
}

fn invalid<T>(detail: impl Into<String>) -> io::Result<T> {
    Err(io::Error::new(io::ErrorKind::InvalidData, detail.into()))
}

/// Reads one request from `rx`.
///
/// Returns `Ok(None)` on a clean end of stream before the first byte of a new
/// request, which is how keep-alive connections end.
///
/// # Arguments
/// * `rx` - A buffered reader over the connection's receiving half.
///
/// # Errors
/// `InvalidData` for malformed requests, unsupported methods, or a head or
/// body over the size caps; other `io::Error`s bubble up from the transport.
pub async fn read_request<R>(rx: &mut R) -> io::Result<Option<Request>>
where
    R: AsyncBufRead + Unpin,
{
    let mut head = rx.take(MAX_HEAD as u64);
    let mut line = Vec::new();

    if head.read_until(b'\n', &mut line).await? == 0 {
        return Ok(None);
    }

    let (method, target) = parse_request_line(str_line(&line)?)?;

    let mut content_length = 0;
    loop {
        line.clear();
        if head.read_until(b'\n', &mut line).await? == 0 {
            return invalid("header block truncated or over the size cap");
        }

        let text = str_line(&line)?;
        if text.is_empty() {
            break;
        }

        if let Some(value) = header_value(text, "content-length") {
            content_length = value
                .parse()
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "invalid content-length"))?;
        }
    }

    if content_length > MAX_BODY {
        return invalid(format!(
            "request body of {content_length} bytes is over the {MAX_BODY} byte cap"
        ));
    }

    let mut body = vec![0; content_length];
    head.into_inner().read_exact(&mut body).await?;

    Ok(Some(Request {
        method,
        target,
        body,
    }))
}

fn parse_request_line(text: &str) -> io::Result<(Method, String)> {
    let mut parts = text.split_whitespace();

    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return invalid(format!("malformed request line '{text}'"));
    };

    let method = match method {
        "GET" => Method::Get,
        "POST" => Method::Post,
        other => return invalid(format!("unsupported method {other}")),
    };

    if !version.starts_with("HTTP/1.") {
        return invalid(format!("unsupported protocol version {version}"));
    }

    Ok((method, target.to_string()))
}

fn str_line(line: &[u8]) -> io::Result<&str> {
    match str::from_utf8(line) {
        Ok(text) => Ok(text.trim_end_matches(['\r', '\n'])),
        Err(e) => invalid(format!("non-utf8 header bytes: {e}")),
    }
}

fn header_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let (key, value) = line.split_once(':')?;
    key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncWriteExt, BufReader, duplex};

    use super::*;

    async fn parse(raw: &[u8]) -> io::Result<Option<Request>> {
        let (mut client, server) = duplex(MAX_HEAD + MAX_BODY + 1024);
        client.write_all(raw).await.unwrap();
        client.shutdown().await.unwrap();

        let mut rx = BufReader::new(server);
        read_request(&mut rx).await
    }

    #[tokio::test]
    async fn parses_a_bodyless_get() {
        let req = parse(b"GET /path HTTP/1.1\r\nhost: localhost\r\n\r\n")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.target, "/path");
        assert!(req.body.is_empty());
    }

    #[tokio::test]
    async fn parses_a_post_with_content_length() {
        let req = parse(b"POST /api HTTP/1.1\r\nContent-Length: 4\r\n\r\nbody")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body, b"body");
    }

    #[tokio::test]
    async fn clean_eof_is_end_of_stream() {
        assert!(parse(b"").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unsupported_method_is_invalid_data() {
        let err = parse(b"DELETE / HTTP/1.1\r\n\r\n").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_without_reading_it() {
        let raw = format!("POST / HTTP/1.1\r\ncontent-length: {}\r\n\r\n", MAX_BODY + 1);
        let err = parse(raw.as_bytes()).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn oversized_head_is_rejected() {
        let mut raw = b"GET / HTTP/1.1\r\n".to_vec();
        raw.extend(std::iter::repeat_n(b'a', MAX_HEAD));
        raw.extend_from_slice(b"\r\n\r\n");

        let err = parse(&raw).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn two_requests_back_to_back() {
        let (mut client, server) = duplex(4096);
        client
            .write_all(b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\n")
            .await
            .unwrap();
        client.shutdown().await.unwrap();

        let mut rx = BufReader::new(server);
        let first = read_request(&mut rx).await.unwrap().unwrap();
        let second = read_request(&mut rx).await.unwrap().unwrap();

        assert_eq!(first.target, "/a");
        assert_eq!(second.target, "/b");
        assert!(read_request(&mut rx).await.unwrap().is_none());
    }
}
