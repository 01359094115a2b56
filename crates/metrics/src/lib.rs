//! Metrics plumbing shared by the snowpoll crates.
//!
//! Re-exports the `prometheus` types the workspace uses so that downstream
//! crates depend on a single metrics surface, and provides text exposition.
//! Registries are owned by the embedder and passed down explicitly; this
//! crate deliberately does not hold a process-wide registry.

pub use prometheus::{Error, GaugeVec, IntCounterVec, Opts, Registry};

/// Encode all metrics gathered from `registry` in the Prometheus text
/// exposition format.
pub fn export<W: std::io::Write>(registry: &Registry, writer: &mut W) -> Result<(), Error> {
    use prometheus::{Encoder, TextEncoder};

    TextEncoder::new().encode(&registry.gather(), writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_encodes_registered_metrics() {
        let registry = Registry::new();
        let requests = IntCounterVec::new(
            Opts::new("requests", "Total requests by kind"),
            &["kind"],
        )
        .unwrap();
        registry.register(Box::new(requests.clone())).unwrap();
        requests.with_label_values(&["query"]).inc();

        let mut buf = Vec::new();
        export(&registry, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("requests{kind=\"query\"} 1"));
    }
}
