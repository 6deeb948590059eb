//! Builder for [`BundleWalker`].

use super::{
    reporter::{LogReporter, WalkReporter},
    sniff::{BinaryDetector, ContentSniffer},
    walk::{BundleWalker, DEFAULT_MAX_CONCURRENT_IO},
};
use std::sync::Arc;

/// Builder for a [`BundleWalker`] with custom collaborators.
///
/// Unset parts fall back to [`ContentSniffer`], [`LogReporter`] and
/// [`DEFAULT_MAX_CONCURRENT_IO`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_signlist::walker::{BundleWalkerBuilder, ContentSniffer, SilentReporter};
///
/// let walker = BundleWalkerBuilder::new()
///     .detector(ContentSniffer)
///     .reporter(SilentReporter)
///     .build();
/// ```
#[derive(Default)]
pub struct BundleWalkerBuilder {
    detector: Option<Arc<dyn BinaryDetector>>,
    reporter: Option<Arc<dyn WalkReporter>>,
    max_concurrent_io: Option<usize>,
}

impl BundleWalkerBuilder {
    /// Creates a builder with no collaborators set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the predicate used to decide whether a file is binary.
    pub fn detector(mut self, detector: impl BinaryDetector + 'static) -> Self {
        self.detector = Some(Arc::new(detector));
        self
    }

    /// Sets a shared detector.
    pub fn shared_detector(mut self, detector: Arc<dyn BinaryDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Sets the receiver of walk events.
    pub fn reporter(mut self, reporter: impl WalkReporter + 'static) -> Self {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Sets a shared reporter, e.g. one a test keeps a handle to.
    pub fn shared_reporter(mut self, reporter: Arc<dyn WalkReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Caps how many entries are stat-ed, sniffed or deleted at once.
    ///
    /// Zero is treated as one.
    pub fn max_concurrent_io(mut self, limit: usize) -> Self {
        self.max_concurrent_io = Some(limit);
        self
    }

    /// Builds the walker.
    pub fn build(self) -> BundleWalker {
        BundleWalker::with_parts(
            self.detector.unwrap_or_else(|| Arc::new(ContentSniffer)),
            self.reporter.unwrap_or_else(|| Arc::new(LogReporter)),
            self.max_concurrent_io.unwrap_or(DEFAULT_MAX_CONCURRENT_IO),
        )
    }
}
