//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use dns_forward::upstream::{Transport, Upstream};

/// Build a pool of `n` distinct loopback upstreams on ports 5301...
pub fn upstream_pool(n: u16) -> Vec<Arc<Upstream>> {
    (0..n)
        .map(|i| {
            Arc::new(Upstream::new(
                format!("127.0.0.1:{}", 5301 + i).parse().unwrap(),
                Transport::Dns,
            ))
        })
        .collect()
}

/// True when `a` and `b` hold the same elements with the same counts.
pub fn same_multiset<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    fn counts<T: Eq + Hash>(xs: &[T]) -> HashMap<&T, usize> {
        let mut m = HashMap::new();
        for x in xs {
            *m.entry(x).or_insert(0) += 1;
        }
        m
    }
    a.len() == b.len() && counts(a) == counts(b)
}

/// Write a TOML config to a temp file.
#[allow(dead_code)]
pub fn write_config(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
