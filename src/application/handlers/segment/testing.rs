//! Test doubles shared by the segment handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::memory::InMemorySegmentStore;
use crate::domain::foundation::{Gender, Pagination, SegmentId};
use crate::domain::segment::{GenderGroup, Segment, SegmentUser};
use crate::ports::{SegmentError, SegmentReader};

pub(crate) fn user(gender: &str, income: f64, segments: &[SegmentId]) -> SegmentUser {
    SegmentUser::new(Gender::new(gender).unwrap(), income, segments.to_vec())
}

pub(crate) async fn seed_segments(store: &InMemorySegmentStore, n: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(n);
    for i in 0..n {
        let segment = Segment::new(SegmentId::new(), format!("Segment {}", i));
        store.insert_segment(segment.clone()).await;
        segments.push(segment);
    }
    segments
}

/// Reader whose every call fails like a dropped connection.
pub(crate) struct FailingSegmentReader;

#[async_trait]
impl SegmentReader for FailingSegmentReader {
    async fn list_segments(&self, _pagination: Pagination) -> Result<Vec<Segment>, SegmentError> {
        Err(SegmentError::Store("connection refused".to_string()))
    }

    async fn find_segment(&self, _id: SegmentId) -> Result<Option<Segment>, SegmentError> {
        Err(SegmentError::Store("connection refused".to_string()))
    }

    async fn count_segments(&self) -> Result<u64, SegmentError> {
        Err(SegmentError::Store("connection refused".to_string()))
    }

    async fn gender_groups(&self, _id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError> {
        Err(SegmentError::Store("connection refused".to_string()))
    }
}

/// Delays the grouping query of one segment, delegating everything else.
pub(crate) struct SlowSegmentReader {
    inner: InMemorySegmentStore,
    slow_segment: SegmentId,
    delay: Duration,
}

impl SlowSegmentReader {
    pub(crate) fn new(inner: InMemorySegmentStore, slow_segment: SegmentId, delay: Duration) -> Self {
        Self {
            inner,
            slow_segment,
            delay,
        }
    }
}

#[async_trait]
impl SegmentReader for SlowSegmentReader {
    async fn list_segments(&self, pagination: Pagination) -> Result<Vec<Segment>, SegmentError> {
        self.inner.list_segments(pagination).await
    }

    async fn find_segment(&self, id: SegmentId) -> Result<Option<Segment>, SegmentError> {
        self.inner.find_segment(id).await
    }

    async fn count_segments(&self) -> Result<u64, SegmentError> {
        self.inner.count_segments().await
    }

    async fn gender_groups(&self, id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError> {
        if id == self.slow_segment {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.gender_groups(id).await
    }
}

/// Records how many grouping queries are running at the same time.
///
/// Each call stays in flight for `hold` before delegating, so concurrent
/// calls overlap and sequential ones never do.
pub(crate) struct InFlightRecordingReader {
    inner: InMemorySegmentStore,
    hold: Duration,
    in_flight: AtomicUsize,
    peak: Arc<AtomicUsize>,
}

impl InFlightRecordingReader {
    pub(crate) fn new(inner: InMemorySegmentStore, hold: Duration) -> Self {
        Self {
            inner,
            hold,
            in_flight: AtomicUsize::new(0),
            peak: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle for reading the peak after the reader has been moved.
    pub(crate) fn peak(&self) -> Arc<AtomicUsize> {
        self.peak.clone()
    }
}

#[async_trait]
impl SegmentReader for InFlightRecordingReader {
    async fn list_segments(&self, pagination: Pagination) -> Result<Vec<Segment>, SegmentError> {
        self.inner.list_segments(pagination).await
    }

    async fn find_segment(&self, id: SegmentId) -> Result<Option<Segment>, SegmentError> {
        self.inner.find_segment(id).await
    }

    async fn count_segments(&self) -> Result<u64, SegmentError> {
        self.inner.count_segments().await
    }

    async fn gender_groups(&self, id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.hold).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.inner.gender_groups(id).await
    }
}
