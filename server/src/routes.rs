use std::{io, sync::Arc};

use estimator::{EstimateRequest, Estimator};
use log::{debug, warn};
use serde_json::json;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use crate::{
    http::{Method, Request, Response, read_request},
    page,
};

/// The request router, sharing the read-only estimator across connections.
#[derive(Clone)]
pub struct App {
    estimator: Arc<Estimator>,
}

impl App {
    /// Creates a new `App`.
    ///
    /// # Arguments
    /// * `estimator` - The loaded inference endpoint, shared by every
    ///   connection without locking.
    pub fn new(estimator: Arc<Estimator>) -> Self {
        Self { estimator }
    }

    /// Serves requests on one connection, in order, until the peer closes.
    ///
    /// A malformed request gets a `400` and closes the connection.
    ///
    /// # Errors
    /// Returns an `io::Error` if the transport fails mid-exchange.
    pub async fn serve_connection<S>(&self, stream: S) -> io::Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let (rx, mut tx) = tokio::io::split(stream);
        let mut rx = BufReader::new(rx);

        loop {
            let req = match read_request(&mut rx).await {
                Ok(Some(req)) => req,
                Ok(None) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("malformed request: {e}");
                    return Response::bad_request("malformed request").write_to(&mut tx).await;
                }
                Err(e) => return Err(e),
            };

            let resp = self.route(&req);
            debug!(status = resp.status(); "{:?} {} served", req.method, req.target);
            resp.write_to(&mut tx).await?;
        }
    }

    fn route(&self, req: &Request) -> Response {
        match (req.method, req.target.as_str()) {
            (Method::Get, "/") => Response::html(page::render(&self.estimator)),
            (Method::Post, "/api/estimate") => self.estimate(&req.body),
            (_, "/api/estimate") => Response::method_not_allowed(),
            _ => Response::not_found(),
        }
    }

    fn estimate(&self, body: &[u8]) -> Response {
        let req: EstimateRequest = match serde_json::from_slice(body) {
            Ok(req) => req,
            Err(e) => {
                warn!("undecodable estimate body: {e}");
                return Response::bad_request("invalid request body");
            }
        };

        match self.estimator.estimate(&req) {
            Ok(rent) => {
                let display = format!("Estimated Monthly Rent: ₹ {}", group_thousands(rent));
                Response::json(json!({ "rent": rent, "display": display }).to_string())
            }
            Err(e) => {
                warn!("estimate rejected: {e}");
                Response::bad_request(&e.to_string())
            }
        }
    }
}

/// Formats `n` with comma thousands grouping.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
