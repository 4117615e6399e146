use super::{
    render_text,
    Publisher,
};
use crate::metrics::MetricSample;
use eyre::{
    bail,
    eyre,
    Result,
    WrapErr as _,
};
use reqwest::{
    header::CONTENT_TYPE,
    Client as HttpClient,
    StatusCode,
};
use std::{
    future::Future,
    pin::Pin,
};
use tracing::{
    debug,
    info,
};
use url::Url;

/// Job the batch is pushed under.
pub const JOB_NAME: &str = "gitlab_scrape";

/// Label names the gateway derives from the push URL.
const GROUPING_LABELS: &[&str] = &["job"];

/// Pushes the batch to a Prometheus Pushgateway, replacing all metrics of
/// the job.
#[derive(Debug, Clone)]
pub struct PushgatewayPublisher {
    http_client: HttpClient,
    endpoint: Url,
}

impl PushgatewayPublisher {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_job(url, JOB_NAME)
    }

    /// Like the Go client, a URL without scheme is taken as `http://`.
    pub fn with_job(url: &str, job: &str) -> Result<Self> {
        let url = url.trim();
        let url = if url.contains("://") {
            url.to_string()
        } else {
            format!("http://{url}")
        };

        let mut endpoint = Url::parse(&url).wrap_err_with(|| format!("Invalid Push Gateway URL '{url}'"))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| eyre!("Push Gateway URL '{url}' cannot be a base URL"))?
            .pop_if_empty()
            .extend(["metrics", "job", job]);

        Ok(Self {
            http_client: HttpClient::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn push(&self, samples: &[MetricSample]) -> Result<()> {
        for sample in samples {
            if let Some(label) = GROUPING_LABELS.iter().find(|label| sample.labels.contains_key(**label)) {
                bail!(
                    "pushed metric {} already contains grouping label {label}",
                    sample.name
                );
            }
        }

        let body = render_text(samples)?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "Pushing metrics");

        let response = self
            .http_client
            .put(self.endpoint.clone())
            .header(CONTENT_TYPE, prometheus::TEXT_FORMAT)
            .body(body)
            .send()
            .await
            .wrap_err_with(|| format!("Request to {} failed", self.endpoint))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::ACCEPTED {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "unexpected status code {status} while pushing to {}: {body}",
                self.endpoint
            );
        }

        info!(endpoint = %self.endpoint, samples = samples.len(), "Pushed metrics");
        Ok(())
    }
}

impl Publisher for PushgatewayPublisher {
    fn publish<'a>(&'a self, samples: &'a [MetricSample]) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(self.push(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metrics::{
            Labels,
            MetricKind,
        },
        testing::{
            http_response,
            serve_once,
        },
    };

    fn sample(labels: &[(&str, &str)]) -> MetricSample {
        let labels: Labels = labels.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        MetricSample::new(MetricKind::ProjectCount, 3, labels)
    }

    #[test]
    fn endpoint_includes_job() {
        for url in [
            "http://pushgateway:9091",
            "http://pushgateway:9091/",
            "pushgateway:9091",
        ] {
            let publisher = PushgatewayPublisher::new(url).unwrap();
            assert_eq!(
                publisher.endpoint().as_str(),
                "http://pushgateway:9091/metrics/job/gitlab_scrape",
                "{url}"
            );
        }
    }

    #[tokio::test]
    async fn puts_text_body() {
        let (url, server) = serve_once(http_response("200 OK", &[], "")).await;
        let publisher = PushgatewayPublisher::new(&url).unwrap();

        publisher
            .publish(&[sample(&[("group_id", "G1"), ("team", "x")])])
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /metrics/job/gitlab_scrape HTTP/1.1\r\n"), "{request}");
        assert!(
            request.to_lowercase().contains("content-type: text/plain; version=0.0.4"),
            "{request}"
        );
        assert!(
            request.ends_with("gitlab_group_project_count{group_id=\"G1\",team=\"x\"} 3\n"),
            "{request}"
        );
    }

    #[tokio::test]
    async fn accepted_is_success() {
        let (url, server) = serve_once(http_response("202 Accepted", &[], "")).await;
        let publisher = PushgatewayPublisher::new(&url).unwrap();

        publisher.publish(&[sample(&[("group_id", "G1")])]).await.unwrap();
        server.await.unwrap();
    }

    #[tokio::test]
    async fn error_status_fails_with_body() {
        let (url, server) = serve_once(http_response("400 Bad Request", &[], "bad metric")).await;
        let publisher = PushgatewayPublisher::new(&url).unwrap();

        let err = publisher.publish(&[sample(&[("group_id", "G1")])]).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("400 Bad Request"), "{message}");
        assert!(message.contains("bad metric"), "{message}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn job_label_is_rejected_before_pushing() {
        // Nothing listens on the endpoint, the check has to fail first.
        let publisher = PushgatewayPublisher::new("http://127.0.0.1:9").unwrap();

        let err = publisher
            .publish(&[sample(&[("group_id", "G1"), ("job", "other")])])
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "pushed metric gitlab_group_project_count already contains grouping label job"
        );
    }
}
