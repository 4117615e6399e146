//! Stubs shared by the unit tests.

use crate::{
    collectors::Collector,
    gitlab::GroupsApi,
    metrics::{
        MetricKind,
        MetricSample,
    },
    publisher::Publisher,
};
use eyre::{
    bail,
    Result,
};
use gitlab_stats_config::GroupConfig;
use std::{
    collections::{
        BTreeMap,
        BTreeSet,
    },
    future::Future,
    pin::Pin,
    sync::{
        atomic::{
            AtomicUsize,
            Ordering,
        },
        Arc,
        Mutex,
    },
};
use tokio::{
    io::{
        AsyncReadExt as _,
        AsyncWriteExt as _,
    },
    net::TcpListener,
    task::JoinHandle,
};

/// In-memory `GroupsApi` that records every call as `"<resource>:<group>"`.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubGroupsApi {
    /// group id -> (total without sub-groups, total with sub-groups)
    projects: BTreeMap<String, (u64, u64)>,
    members: BTreeMap<String, u64>,
    failing: BTreeSet<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubGroupsApi {
    pub(crate) fn with_projects(mut self, group_id: &str, direct: u64, with_subgroups: u64) -> Self {
        self.projects.insert(group_id.to_string(), (direct, with_subgroups));
        self
    }

    pub(crate) fn with_members(mut self, group_id: &str, total: u64) -> Self {
        self.members.insert(group_id.to_string(), total);
        self
    }

    pub(crate) fn failing_for(mut self, group_id: &str) -> Self {
        self.failing.insert(group_id.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GroupsApi for StubGroupsApi {
    fn count_projects<'a>(
        &'a self,
        group_id: &'a str,
        include_subgroups: bool,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            self.record(format!("projects:{group_id}"));
            if self.failing.contains(group_id) {
                bail!("401 Unauthorized");
            }
            match self.projects.get(group_id) {
                Some((direct, _)) if !include_subgroups => Ok(*direct),
                Some((_, with_subgroups)) => Ok(*with_subgroups),
                None => bail!("404 Group Not Found"),
            }
        })
    }

    fn count_members<'a>(&'a self, group_id: &'a str) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            self.record(format!("members:{group_id}"));
            if self.failing.contains(group_id) {
                bail!("401 Unauthorized");
            }
            match self.members.get(group_id) {
                Some(total) => Ok(*total),
                None => bail!("404 Group Not Found"),
            }
        })
    }
}

/// Collector returning a fixed value and counting its invocations.
#[derive(Debug, Clone)]
pub(crate) struct CountingCollector {
    kind: MetricKind,
    value: u64,
    invocations: Arc<AtomicUsize>,
}

impl CountingCollector {
    pub(crate) fn new(kind: MetricKind, value: u64) -> Self {
        Self {
            kind,
            value,
            invocations: Default::default(),
        }
    }

    pub(crate) fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl Collector for CountingCollector {
    fn kind(&self) -> MetricKind {
        self.kind
    }

    fn collect<'a>(
        &'a self,
        _api: &'a dyn GroupsApi,
        _group: &'a GroupConfig,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(async move {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(self.value)
        })
    }
}

/// Publisher keeping every batch it was handed.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingPublisher {
    batches: Arc<Mutex<Vec<Vec<MetricSample>>>>,
    fail: bool,
}

impl RecordingPublisher {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn batches(&self) -> Vec<Vec<MetricSample>> {
        self.batches.lock().unwrap().clone()
    }
}

impl Publisher for RecordingPublisher {
    fn publish<'a>(&'a self, samples: &'a [MetricSample]) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.batches.lock().unwrap().push(samples.to_vec());
            if self.fail {
                bail!("connection refused");
            }
            Ok(())
        })
    }
}

pub(crate) fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ));
    response
}

/// Accepts a single HTTP request, answers with `response` and resolves to the
/// raw request text.
pub(crate) async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if request.len() >= header_end + 4 + content_length {
                break;
            }
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}
