//! Lightweight global metrics for manifestdb.
//!
//! Потокобезопасные атомарные счётчики:
//! - Loads (parsed files, missing files)
//! - Writes (count, bytes, failures, skipped no-op writes)
//! - Mutations applied to in-memory content

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Loads -----
static LOADS_TOTAL: AtomicU64 = AtomicU64::new(0);
static LOADS_MISSING: AtomicU64 = AtomicU64::new(0);

// ----- Writes -----
static WRITES_TOTAL: AtomicU64 = AtomicU64::new(0);
static WRITE_BYTES: AtomicU64 = AtomicU64::new(0);
static WRITES_FAILED: AtomicU64 = AtomicU64::new(0);
static WRITES_SKIPPED: AtomicU64 = AtomicU64::new(0);

// ----- Mutations -----
static MUTATIONS_TOTAL: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub loads_total: u64,
    pub loads_missing: u64,

    pub writes_total: u64,
    pub write_bytes: u64,
    pub writes_failed: u64,
    pub writes_skipped: u64,

    pub mutations_total: u64,
}

impl MetricsSnapshot {
    pub fn avg_write_bytes(&self) -> f64 {
        if self.writes_total == 0 {
            0.0
        } else {
            self.write_bytes as f64 / self.writes_total as f64
        }
    }
}

pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        loads_total: LOADS_TOTAL.load(Ordering::Relaxed),
        loads_missing: LOADS_MISSING.load(Ordering::Relaxed),
        writes_total: WRITES_TOTAL.load(Ordering::Relaxed),
        write_bytes: WRITE_BYTES.load(Ordering::Relaxed),
        writes_failed: WRITES_FAILED.load(Ordering::Relaxed),
        writes_skipped: WRITES_SKIPPED.load(Ordering::Relaxed),
        mutations_total: MUTATIONS_TOTAL.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    LOADS_TOTAL.store(0, Ordering::Relaxed);
    LOADS_MISSING.store(0, Ordering::Relaxed);
    WRITES_TOTAL.store(0, Ordering::Relaxed);
    WRITE_BYTES.store(0, Ordering::Relaxed);
    WRITES_FAILED.store(0, Ordering::Relaxed);
    WRITES_SKIPPED.store(0, Ordering::Relaxed);
    MUTATIONS_TOTAL.store(0, Ordering::Relaxed);
}

// ----- recorders -----

#[inline]
pub fn record_load() {
    LOADS_TOTAL.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn record_load_missing() {
    LOADS_MISSING.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn record_write(bytes: u64) {
    WRITES_TOTAL.fetch_add(1, Ordering::Relaxed);
    WRITE_BYTES.fetch_add(bytes, Ordering::Relaxed);
}

#[inline]
pub fn record_write_failed() {
    WRITES_FAILED.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn record_write_skipped() {
    WRITES_SKIPPED.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn record_mutation() {
    MUTATIONS_TOTAL.fetch_add(1, Ordering::Relaxed);
}
