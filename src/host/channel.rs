use reqwest::Client as HttpClient;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    host::{HttpChannel, HttpChannelFactory, RequestDescriptor},
};

/// [`HttpChannel`] backed by reqwest, for hosts without a request helper of
/// their own and for running the plugin outside a host.
pub struct ReqwestChannel {
    http_client: HttpClient,
    cleared: Notify,
}

impl ReqwestChannel {
    pub fn new(http_client: HttpClient) -> Self {
        Self {
            http_client,
            cleared: Notify::new(),
        }
    }
}

#[async_trait::async_trait]
impl HttpChannel for ReqwestChannel {
    async fn get(&self, request: &RequestDescriptor) -> AppResult<String> {
        // Registered before the request starts so a clear() racing with send is not lost.
        let cleared = self.cleared.notified();

        let fetch = async {
            let response = self.http_client.get(&request.url).send().await?;

            if !response.status().is_success() {
                return Err(AppError::ExternalApi(format!(
                    "site returned status {}",
                    response.status()
                )));
            }

            Ok(response.text().await?)
        };

        tokio::select! {
            result = fetch => result,
            _ = cleared => {
                tracing::debug!(url = %request.url, "Request cancelled by channel clear");
                Err(AppError::Cancelled)
            }
        }
    }

    fn clear(&self) {
        self.cleared.notify_waiters();
    }
}

/// Hands out one channel per component, all sharing a connection pool
#[derive(Clone)]
pub struct ReqwestChannelFactory {
    http_client: HttpClient,
}

impl ReqwestChannelFactory {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http_client })
    }
}

impl HttpChannelFactory for ReqwestChannelFactory {
    fn channel(&self) -> Arc<dyn HttpChannel> {
        Arc::new(ReqwestChannel::new(self.http_client.clone()))
    }
}
