//! Recursive, concurrent bundle traversal.

use super::{
    classify::{EntryKind, is_bundle_dir_name},
    error::{Error, Result},
    fs,
    reporter::{LogReporter, WalkReporter},
    sniff::{BinaryDetector, ContentSniffer},
    tree::Nested,
};
use std::{
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
    sync::Arc,
};
use tokio::sync::{Semaphore, SemaphorePermit};
use tokio::task::JoinSet;

/// Default cap on entries being stat-ed, sniffed or deleted at the same time.
///
/// Keeps the number of open descriptors well below macOS's default soft
/// limit of 256, whatever the size of a single directory.
pub const DEFAULT_MAX_CONCURRENT_IO: usize = 64;

type WalkFuture = Pin<Box<dyn Future<Output = Result<Nested<PathBuf>>> + Send + 'static>>;

/// Collects the paths inside a bundle that need signing, deepest first.
///
/// Every binary file and every nested `.app` / `.framework` directory under
/// the root is reported, and each bundle appears only after everything it
/// contains. Leftover `.cstemp` files are deleted along the way. Symbolic
/// links are never followed or reported.
///
/// Siblings are visited concurrently, but at most
/// [`DEFAULT_MAX_CONCURRENT_IO`] entries (or the builder's limit) touch the
/// filesystem at once. The walker is cheap to clone; clones share the
/// detector, the reporter and the I/O limit.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_signlist::walker::BundleWalker;
///
/// # async fn example() -> kodegen_bundler_signlist::walker::Result<()> {
/// let walker = BundleWalker::new();
/// for path in walker.signing_order("target/release/bundle/MyApp.app").await? {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BundleWalker {
    detector: Arc<dyn BinaryDetector>,
    reporter: Arc<dyn WalkReporter>,
    io_permits: Arc<Semaphore>,
}

impl std::fmt::Debug for BundleWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleWalker")
            .field("detector", &"<dyn BinaryDetector>")
            .field("reporter", &"<dyn WalkReporter>")
            .field("io_permits", &self.io_permits.available_permits())
            .finish()
    }
}

impl Default for BundleWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleWalker {
    /// Creates a walker with content sniffing and `log`-backed reporting.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(ContentSniffer),
            Arc::new(LogReporter),
            DEFAULT_MAX_CONCURRENT_IO,
        )
    }

    pub(super) fn with_parts(
        detector: Arc<dyn BinaryDetector>,
        reporter: Arc<dyn WalkReporter>,
        max_concurrent_io: usize,
    ) -> Self {
        Self {
            detector,
            reporter,
            io_permits: Arc::new(Semaphore::new(max_concurrent_io.max(1))),
        }
    }

    /// Walks `root` and returns the flattened signing list.
    ///
    /// `root` itself is not part of the result, even if it is a bundle; see
    /// [`signing_order`](Self::signing_order) for that. Any filesystem error
    /// aborts the whole walk.
    pub async fn walk(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let root = fs::absolute(root.as_ref())?;
        let tree = self.walk_tree(root).await?;
        Ok(tree.compact_flattened_list())
    }

    /// Walks `target` and appends `target` itself when it is a bundle.
    ///
    /// This is the order a signer consumes for a top-level `.app`: every
    /// nested binary and bundle first, the application last.
    pub async fn signing_order(&self, target: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let target = fs::absolute(target.as_ref())?;
        let meta = fs::lstat(&target).await?;
        if !meta.is_dir() {
            crate::bail!("{} is not a directory", target.display());
        }

        let mut paths = self.walk(&target).await?;
        if is_bundle_dir_name(&target) {
            self.reporter.found_bundle(&target);
            paths.push(target);
        }
        Ok(paths)
    }

    /// Walks one directory level, fanning out over its children.
    ///
    /// Returns the unflattened per-child contributions in listing order.
    fn walk_tree(&self, dir: PathBuf) -> WalkFuture {
        let walker = self.clone();
        Box::pin(async move {
            walker.reporter.entering_dir(&dir);
            let children = {
                let _permit = walker.io_permit().await?;
                fs::list_dir(&dir).await?
            };

            let mut tasks = JoinSet::new();
            for (index, child) in children.into_iter().enumerate() {
                let walker = walker.clone();
                tasks.spawn(async move {
                    let contribution = walker.visit(child).await?;
                    Ok::<_, Error>((index, contribution))
                });
            }

            let mut slots: Vec<Nested<PathBuf>> = Vec::new();
            slots.resize_with(tasks.len(), || Nested::Absent);

            // Dropping the set on an early return aborts the remaining siblings.
            while let Some(joined) = tasks.join_next().await {
                let (index, contribution) = joined??;
                slots[index] = contribution;
            }

            Ok::<_, Error>(Nested::List(slots))
        })
    }

    /// Waits for a slot to touch the filesystem.
    ///
    /// Permits are only held around single operations, never across a
    /// recursive `walk_tree`, so nested directories cannot starve each other.
    async fn io_permit(&self) -> Result<SemaphorePermit<'_>> {
        self.io_permits
            .acquire()
            .await
            .map_err(|_| Error::GenericError("walker I/O limiter closed".to_string()))
    }

    /// Classifies and processes a single directory entry.
    async fn visit(&self, path: PathBuf) -> Result<Nested<PathBuf>> {
        let kind = {
            let _permit = self.io_permit().await?;
            let metadata = fs::lstat(&path).await?;
            EntryKind::classify(&path, &metadata)
        };

        match kind {
            EntryKind::StaleArtifact => {
                let _permit = self.io_permit().await?;
                fs::remove_file_if_exists(&path).await?;
                self.reporter.removed_stale_artifact(&path);
                Ok(Nested::Absent)
            }
            EntryKind::Candidate => {
                let is_binary = {
                    let _permit = self.io_permit().await?;
                    self.detector.is_binary(&path).await?
                };
                if is_binary {
                    self.reporter.found_binary(&path);
                    Ok(Nested::Item(path))
                } else {
                    Ok(Nested::Absent)
                }
            }
            EntryKind::Directory => self.walk_tree(path).await,
            EntryKind::Bundle => {
                let mut contents = self.walk_tree(path.clone()).await?;
                self.reporter.found_bundle(&path);
                contents.push(path);
                Ok(contents)
            }
            EntryKind::Symlink | EntryKind::Other => {
                self.reporter.skipped(&path);
                Ok(Nested::Absent)
            }
        }
    }
}
