//! Concurrency tests for the lookup-or-insert caches
//!
//! These tests verify:
//! - One logger per namespace when many threads race on `get`
//! - One bundle per plugin id under contention
//! - One progress handle per key under contention
//! - Every line reaches the sink intact

use serverless_log::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

fn shared_output() -> (Arc<Output>, MemorySink) {
    let sink = MemorySink::new();
    let output = Output::builder()
        .level(LogLevel::Debug)
        .colors(false)
        .sink(sink.clone())
        .build();
    (Arc::new(output), sink)
}

fn race<T, F>(output: &Arc<Output>, work: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(&Output) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(THREADS));
    let work = Arc::new(work);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let output = Arc::clone(output);
            let barrier = Arc::clone(&barrier);
            let work = Arc::clone(&work);
            thread::spawn(move || {
                barrier.wait();
                (*work)(&*output)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect()
}

#[test]
fn test_concurrent_namespace_lookup() {
    let (output, _sink) = shared_output();
    let loggers = race(&output, |output| output.log().get("contended"));

    let first = &loggers[0];
    assert!(loggers.iter().all(|logger| Arc::ptr_eq(first, logger)));
}

#[test]
fn test_concurrent_plugin_lookup() {
    let (output, _sink) = shared_output();
    let bundles = race(&output, |output| output.get_plugin_writers("contended"));

    let first = &bundles[0];
    assert!(bundles.iter().all(|bundle| Arc::ptr_eq(first, bundle)));
    assert!(bundles
        .iter()
        .all(|bundle| Arc::ptr_eq(first.log(), bundle.log())));
}

#[test]
fn test_concurrent_progress_lookup() {
    let (output, _sink) = shared_output();
    let handles = race(&output, |output| output.progress().get("contended"));

    let first = &handles[0];
    assert!(handles.iter().all(|handle| Arc::ptr_eq(first, handle)));
}

#[test]
fn test_concurrent_logging_keeps_lines_whole() {
    let (output, sink) = shared_output();
    race(&output, |output| {
        let log = output.log().get("worker");
        for i in 0..50 {
            log.info(format!("message {}", i));
        }
    });

    let content = sink.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * 50);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("serverless:worker info message ")));
    assert_eq!(output.metrics().written(), (THREADS * 50) as u64);
}
