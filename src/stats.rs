//! Per-bucket feature counts.
//!
//! [`BucketStats`] tallies how many features land in each bucket and
//! summarizes the split between named regions (`North`, `SW`, ...) and
//! drill-down cells. [`SharedBucketStats`] is the thread-safe handle used when
//! features are bucketed in parallel.

use crate::bucket::MacroRegion;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

/// Feature counts keyed by bucket path.
#[derive(Debug, Clone, Default)]
pub struct BucketStats {
    counts: FxHashMap<String, u64>,
    skipped: u64,
}

/// Totals and integer averages over a [`BucketStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Features counted across every bucket
    pub total: u64,
    /// Distinct buckets
    pub buckets: u64,
    pub average: u64,
    /// Features filed under a named region
    pub macro_total: u64,
    pub macro_buckets: u64,
    pub macro_average: u64,
    /// Features filed under a drill-down cell (or the empty bucket)
    pub cell_total: u64,
    pub cell_buckets: u64,
    pub cell_average: u64,
    /// Features that could not be bucketed
    pub skipped: u64,
}

/// Serializable view used for JSON reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub buckets: BTreeMap<String, u64>,
    pub summary: StatsSummary,
}

impl BucketStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one feature in `bucket`.
    pub fn record(&mut self, bucket: impl AsRef<str>) {
        self.record_many(bucket, 1);
    }

    pub fn record_many(&mut self, bucket: impl AsRef<str>, count: u64) {
        let bucket = bucket.as_ref();
        match self.counts.get_mut(bucket) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(bucket.to_string(), count);
            }
        }
    }

    /// Count one feature that produced no bucket.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn count(&self, bucket: &str) -> u64 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Fold another set of counts into this one.
    pub fn merge(&mut self, other: BucketStats) {
        for (bucket, count) in other.counts {
            *self.counts.entry(bucket).or_insert(0) += count;
        }
        self.skipped += other.skipped;
    }

    /// Counts ordered by bucket name.
    pub fn sorted(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(bucket, count)| (bucket.clone(), *count))
            .collect()
    }

    pub fn summary(&self) -> StatsSummary {
        let mut summary = StatsSummary {
            skipped: self.skipped,
            ..StatsSummary::default()
        };

        for (bucket, count) in &self.counts {
            summary.total += count;
            summary.buckets += 1;
            if MacroRegion::from_name(bucket).is_some() {
                summary.macro_total += count;
                summary.macro_buckets += 1;
            } else {
                summary.cell_total += count;
                summary.cell_buckets += 1;
            }
        }

        summary.average = mean(summary.total, summary.buckets);
        summary.macro_average = mean(summary.macro_total, summary.macro_buckets);
        summary.cell_average = mean(summary.cell_total, summary.cell_buckets);
        summary
    }

    pub fn to_report(&self) -> StatsReport {
        StatsReport {
            buckets: self.sorted(),
            summary: self.summary(),
        }
    }

    /// Plain-text table: one row per bucket, then the summary rows.
    ///
    /// ```text
    /// e/z/s :          2
    /// North :      1,024
    /// Sum   :      1,026
    /// ```
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (bucket, count) in self.sorted() {
            push_row(&mut out, &bucket, count);
        }

        let summary = self.summary();
        push_row(&mut out, "Sum", summary.total);
        push_row(&mut out, "Avg", summary.average);
        push_row(&mut out, "BigSum", summary.macro_total);
        push_row(&mut out, "BigBox", summary.macro_average);
        push_row(&mut out, "BktSum", summary.cell_total);
        push_row(&mut out, "Bucket", summary.cell_average);
        if summary.skipped > 0 {
            push_row(&mut out, "Skip", summary.skipped);
        }
        out
    }
}

fn mean(total: u64, count: u64) -> u64 {
    if count == 0 { 0 } else { total / count }
}

fn push_row(out: &mut String, label: &str, count: u64) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:<6}: {:>10}", label, format_count(count));
}

/// Formats a count with thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Cloneable, thread-safe handle around [`BucketStats`].
///
/// # Examples
///
/// ```rust
/// use geobucket::SharedBucketStats;
/// use std::thread;
///
/// let stats = SharedBucketStats::new();
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let stats = stats.clone();
///         thread::spawn(move || stats.record("u/4"))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(stats.snapshot().count("u/4"), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBucketStats {
    inner: Arc<Mutex<BucketStats>>,
}

impl SharedBucketStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, bucket: impl AsRef<str>) {
        self.inner.lock().record(bucket);
    }

    pub fn record_skipped(&self) {
        self.inner.lock().record_skipped();
    }

    /// Copy of the counts so far.
    pub fn snapshot(&self) -> BucketStats {
        self.inner.lock().clone()
    }

    /// Take the counts out, cloning only if other handles are still alive.
    pub fn into_inner(self) -> BucketStats {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut stats = BucketStats::new();
        stats.record("u/4");
        stats.record("u/4");
        stats.record("North");
        stats.record_many("e", 5);

        assert_eq!(stats.count("u/4"), 2);
        assert_eq!(stats.count("North"), 1);
        assert_eq!(stats.count("e"), 5);
        assert_eq!(stats.count("missing"), 0);
        assert_eq!(stats.len(), 3);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_summary_splits_regions_from_cells() {
        let mut stats = BucketStats::new();
        stats.record_many("North", 10);
        stats.record_many("SW", 4);
        // Single-letter cells must not be mistaken for region names.
        stats.record_many("e", 3);
        stats.record_many("s", 3);
        stats.record_many("u/4/p", 6);
        stats.record_skipped();

        let summary = stats.summary();
        assert_eq!(summary.total, 26);
        assert_eq!(summary.buckets, 5);
        assert_eq!(summary.average, 5);
        assert_eq!(summary.macro_total, 14);
        assert_eq!(summary.macro_buckets, 2);
        assert_eq!(summary.macro_average, 7);
        assert_eq!(summary.cell_total, 12);
        assert_eq!(summary.cell_buckets, 3);
        assert_eq!(summary.cell_average, 4);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BucketStats::new().summary();
        assert_eq!(summary, StatsSummary::default());
    }

    #[test]
    fn test_merge() {
        let mut a = BucketStats::new();
        a.record("e/z");
        a.record_skipped();

        let mut b = BucketStats::new();
        b.record("e/z");
        b.record("All");

        a.merge(b);
        assert_eq!(a.count("e/z"), 2);
        assert_eq!(a.count("All"), 1);
        assert_eq!(a.skipped(), 1);
    }

    #[test]
    fn test_report_layout() {
        let mut stats = BucketStats::new();
        stats.record_many("e/z/s", 2);
        stats.record_many("North", 1024);

        let report = stats.report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "North :      1,024");
        assert_eq!(lines[1], "e/z/s :          2");
        assert_eq!(lines[2], "Sum   :      1,026");
        assert_eq!(lines[3], "Avg   :        513");
        assert_eq!(lines[4], "BigSum:      1,024");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(65_536), "65,536");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn test_shared_into_inner() {
        let shared = SharedBucketStats::new();
        shared.record("NE");
        shared.record_skipped();

        let other = shared.clone();
        other.record("NE");

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.count("NE"), 2);

        drop(other);
        let stats = shared.into_inner();
        assert_eq!(stats.count("NE"), 2);
        assert_eq!(stats.skipped(), 1);
    }
}
