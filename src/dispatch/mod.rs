//! Record dispatch.
//!
//! ```text
//! reader ──lines──▶ RecordSplitter ──Record──▶ worker: interpret_record
//!  (calling thread, single producer)              │
//!                                                 ▼
//!                                  DocumentStore (one write lock per append)
//! ```
//!
//! The calling thread reads lines and cuts them into records at every
//! level-0 line. Each finished record becomes one task; the task interprets
//! it without touching shared state and then appends the single result to
//! the [`DocumentStore`]. The scope joins every task before the document is
//! handed back, so no caller can observe a half-filled document.

mod store;

pub use store::DocumentStore;

use std::io::{self, BufRead};

use rayon::Scope;

use crate::error::GedcomError;
use crate::interpret::interpret_record;
use crate::model::Document;
use crate::options::{Concurrency, ParseOptions};
use crate::syntax::{Record, RecordSplitter};

/// Turns line notation into a [`Document`], interpreting records on a pool.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    concurrency: Concurrency,
    threads: Option<usize>,
}

impl Dispatcher {
    pub fn new(concurrency: Concurrency) -> Self {
        Self {
            concurrency,
            threads: None,
        }
    }

    pub fn from_options(options: &ParseOptions) -> Self {
        Self {
            concurrency: options.concurrency,
            threads: options.threads,
        }
    }

    /// Read every line from `reader` and interpret all records.
    ///
    /// Malformed records are logged and skipped. Only a read failure is an
    /// error.
    pub fn dispatch<R: BufRead>(&self, reader: R) -> Result<Document, GedcomError> {
        let store = DocumentStore::new();
        let mut read_error = None;
        let lines =
            split_lines(reader).map_while(|line| line.map_err(|e| read_error = Some(e)).ok());
        let records = RecordSplitter::new(lines);

        let dispatched = match self.concurrency {
            Concurrency::Sequential => records
                .enumerate()
                .map(|(position, record)| interpret_into(&store, position, &record))
                .count(),
            Concurrency::Parallel => match self.dedicated_pool() {
                Some(pool) => pool.in_place_scope(|scope| spawn_all(scope, records, &store)),
                None => rayon::in_place_scope(|scope| spawn_all(scope, records, &store)),
            },
        };

        if let Some(e) = read_error {
            return Err(e.into());
        }

        let (individuals, families) = store.counts();
        tracing::debug!(records = dispatched, individuals, families, "records merged");
        Ok(store.into_document())
    }

    fn dedicated_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.threads?;
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::warn!(threads, error = %e, "falling back to the global pool");
                None
            }
        }
    }
}

fn spawn_all<'scope, I>(scope: &Scope<'scope>, records: I, store: &'scope DocumentStore) -> usize
where
    I: Iterator<Item = Record>,
{
    let mut dispatched = 0;
    for (position, record) in records.enumerate() {
        scope.spawn(move |_| interpret_into(store, position, &record));
        dispatched += 1;
    }
    dispatched
}

fn interpret_into(store: &DocumentStore, position: usize, record: &Record) {
    match interpret_record(record) {
        Ok(interpreted) => store.append(position, interpreted),
        Err(e) => tracing::warn!(
            line = record.head().map(|line| line.raw()).unwrap_or_default(),
            error = %e,
            "skipping record"
        ),
    }
}

/// Split on `\n`, decoding each line as UTF-8. Invalid sequences are
/// replaced rather than failing the whole read.
fn split_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|bytes| {
        bytes.map(|bytes| match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "replacing invalid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    })
}
