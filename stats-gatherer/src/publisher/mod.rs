//! # Publisher Module
//!
//! A run ends with a single call to a `Publisher` that receives the whole
//! batch. Samples become gauges with constant labels and are serialized in
//! the Prometheus text exposition format.

pub mod pushgateway;
pub mod stdout;

use crate::metrics::MetricSample;
use eyre::Result;
use prometheus::{
    Encoder,
    Gauge,
    Opts,
    Registry,
    TextEncoder,
};
use std::{
    future::Future,
    pin::Pin,
};

pub use pushgateway::{
    PushgatewayPublisher,
    JOB_NAME,
};
pub use stdout::StdoutPublisher;

/// Terminal sink of a run
pub trait Publisher: Send + Sync {
    /// Publish the batch as one unit
    fn publish<'a>(&'a self, samples: &'a [MetricSample]) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Renders the batch in the Prometheus text format.
///
/// Fails when two samples share name and label values.
pub fn render_text(samples: &[MetricSample]) -> Result<String> {
    let registry = Registry::new();

    for sample in samples {
        let opts = Opts::new(sample.name, sample.help).const_labels(sample.labels.clone().into_iter().collect());
        let gauge = Gauge::with_opts(opts)?;
        gauge.set(sample.value as f64);
        registry.register(Box::new(gauge))?;
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
