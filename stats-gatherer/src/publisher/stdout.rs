use super::{
    render_text,
    Publisher,
};
use crate::metrics::MetricSample;
use eyre::Result;
use std::{
    future::Future,
    pin::Pin,
};

/// Prints the batch instead of pushing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish<'a>(&'a self, samples: &'a [MetricSample]) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            print!("{}", render_text(samples)?);
            Ok(())
        })
    }
}
