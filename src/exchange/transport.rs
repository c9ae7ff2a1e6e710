use anyhow::Result;
use std::future::Future;

use super::{ConfirmRequest, ExchangeResponse, StartRequest};

/// Sends exchange requests to the backend.
///
/// Any error returned here is treated as a transport failure by the session.
pub trait Transport {
    fn start(
        &self,
        request: &StartRequest<'_>,
    ) -> impl Future<Output = Result<ExchangeResponse>> + Send;

    fn confirm(
        &self,
        request: &ConfirmRequest<'_>,
    ) -> impl Future<Output = Result<ExchangeResponse>> + Send;
}
