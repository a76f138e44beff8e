//! Concurrent survey ingestion
//!
//! A directory walk feeds survey document paths into a bounded queue. A fixed
//! pool of worker tasks pulls paths, reads and reshapes each document, and
//! sends the decoded lake to a single consumer that owns the store. The store
//! is never shared while it is being built, so no lock guards it, and each
//! document's merge is one append by that owner.
//!
//! ```text
//! walk ──paths──▶ [bounded queue] ──▶ worker × N ──lakes──▶ consumer (owns SurveyStore)
//! ```

use crate::app::models::LakeSurvey;
use crate::app::services::survey_store::SurveyStore;
use crate::constants::{
    DEFAULT_INGEST_WORKERS, DEFAULT_QUEUE_CAPACITY, RESULT_CHANNEL_CAPACITY,
    SURVEY_FILE_EXTENSION,
};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub mod stats;
pub mod transform;

#[cfg(test)]
pub mod tests;

pub use stats::IngestStats;
pub use transform::{assign_survey_ids, parse_survey_document, reshape_fish_counts};

/// Result of processing one survey document in a worker
#[derive(Debug)]
enum FileOutcome {
    Loaded {
        lake: LakeSurvey,
        fish_counts_reshaped: usize,
        survey_ids_generated: usize,
    },
    Skipped {
        path: PathBuf,
        error: Error,
    },
}

/// What the directory walk found
#[derive(Debug, Default)]
struct WalkSummary {
    files_discovered: usize,
    first_error: Option<walkdir::Error>,
}

/// Loads a directory tree of survey documents into a `SurveyStore`
#[derive(Debug, Clone)]
pub struct SurveyIngestor {
    workers: usize,
    queue_capacity: usize,
    show_progress: bool,
}

impl Default for SurveyIngestor {
    fn default() -> Self {
        Self {
            workers: DEFAULT_INGEST_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            show_progress: false,
        }
    }
}

impl SurveyIngestor {
    /// Create an ingestor with the default worker count and queue capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker tasks (at least one)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the capacity of the path queue (at least one)
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Show a progress spinner while ingesting
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Ingest every `.json` document under `root`
    ///
    /// Blocks until the walk is exhausted and every worker has finished. A
    /// document that cannot be read or decoded is skipped and recorded in the
    /// returned statistics; it never aborts the run.
    ///
    /// An unreadable entry below `root` is logged and the rest of the tree is
    /// still loaded; the first such error is kept in `IngestStats::walk_error`.
    ///
    /// # Errors
    /// * Returns `Error::DirectoryTraversal` if `root` itself cannot be walked
    /// * Returns `Error::Ingestion` if a worker task panics
    pub async fn ingest(&self, root: &Path) -> Result<(SurveyStore, IngestStats)> {
        info!(
            "Ingesting survey documents from {} with {} workers",
            root.display(),
            self.workers
        );
        let start_time = Instant::now();

        let (path_sender, path_receiver) = mpsc::channel::<PathBuf>(self.queue_capacity);
        let (result_sender, mut result_receiver) =
            mpsc::channel::<FileOutcome>(RESULT_CHANNEL_CAPACITY);

        let walk_root = root.to_path_buf();
        let walker =
            tokio::task::spawn_blocking(move || walk_survey_files(&walk_root, path_sender));

        let path_receiver = Arc::new(Mutex::new(path_receiver));
        let root = Arc::new(root.to_path_buf());
        let mut workers = JoinSet::new();
        for worker_id in 0..self.workers {
            let path_receiver = path_receiver.clone();
            let result_sender = result_sender.clone();
            let root = root.clone();
            workers.spawn(async move {
                worker_task(worker_id, path_receiver, result_sender, root).await
            });
        }
        // Only workers hold senders now; the receive loop ends when they all finish.
        drop(result_sender);

        let progress_bar = self.show_progress.then(create_spinner);

        let mut store = SurveyStore::new();
        let mut stats = IngestStats::new();

        while let Some(outcome) = result_receiver.recv().await {
            match outcome {
                FileOutcome::Loaded {
                    lake,
                    fish_counts_reshaped,
                    survey_ids_generated,
                } => {
                    debug!(
                        "Merged {} surveys for lake '{}' from {}",
                        lake.surveys.len(),
                        lake.lake_name,
                        lake.source_path.display()
                    );
                    stats.files_loaded += 1;
                    stats.lakes_loaded += 1;
                    stats.surveys_loaded += lake.surveys.len();
                    stats.fish_counts_reshaped += fish_counts_reshaped;
                    stats.survey_ids_generated += survey_ids_generated;
                    store.insert(lake);
                }
                FileOutcome::Skipped { path, error } => {
                    warn!("Skipping survey document {}: {}", path.display(), error);
                    stats.add_skipped(format!("{}: {}", path.display(), error));
                }
            }

            if let Some(pb) = &progress_bar {
                pb.inc(1);
                pb.set_message(format!(
                    "{} lakes loaded, {} skipped",
                    stats.lakes_loaded, stats.files_skipped
                ));
            }
        }

        let mut files_handled = 0;
        while let Some(joined) = workers.join_next().await {
            files_handled += joined
                .map_err(|e| Error::ingestion(format!("Ingestion worker failed: {}", e)))?;
        }

        let walk = walker
            .await
            .map_err(|e| Error::ingestion(format!("Directory walk task failed: {}", e)))?;

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("{} lakes loaded", stats.lakes_loaded));
        }

        store.finalize();
        stats.files_discovered = walk.files_discovered;
        stats.load_duration = start_time.elapsed();
        debug!("Workers handled {} documents", files_handled);

        if let Some(error) = walk.first_error {
            if error.depth() == 0 {
                return Err(Error::directory_traversal(
                    format!("Failed walking survey directory {}", root.display()),
                    error,
                ));
            }
            warn!(
                "Survey directory walk was incomplete, keeping {} loaded lakes: {}",
                stats.lakes_loaded, error
            );
            stats.walk_error = Some(error.to_string());
        }

        info!("{}", stats.summary());
        Ok((store, stats))
    }
}

/// Walk `root` and queue every survey document path
///
/// Runs on a blocking thread. Walk errors are logged and the walk continues;
/// the first one is handed back to the caller.
fn walk_survey_files(root: &Path, paths: mpsc::Sender<PathBuf>) -> WalkSummary {
    let mut summary = WalkSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if !entry.file_type().is_file() || !is_survey_file(path) {
                    continue;
                }
                summary.files_discovered += 1;
                if paths.blocking_send(path.to_path_buf()).is_err() {
                    warn!("All ingestion workers stopped; ending directory walk early");
                    break;
                }
            }
            Err(e) => {
                warn!("Error walking survey directory {}: {}", root.display(), e);
                if summary.first_error.is_none() {
                    summary.first_error = Some(e);
                }
            }
        }
    }

    debug!("Directory walk queued {} documents", summary.files_discovered);
    summary
}

/// Worker loop: pull paths until the queue closes, sending one outcome per path
async fn worker_task(
    worker_id: usize,
    paths: Arc<Mutex<mpsc::Receiver<PathBuf>>>,
    results: mpsc::Sender<FileOutcome>,
    root: Arc<PathBuf>,
) -> usize {
    let mut files_handled = 0;
    debug!("Worker {} started", worker_id);

    loop {
        let next = paths.lock().await.recv().await;
        let Some(path) = next else {
            debug!("Worker {} finished - queue closed", worker_id);
            break;
        };

        let outcome = load_survey_file(&path, &root).await;
        files_handled += 1;

        if results.send(outcome).await.is_err() {
            warn!("Worker {} stopping: store consumer has gone away", worker_id);
            break;
        }
    }

    files_handled
}

/// Read, reshape, decode and identify one survey document
async fn load_survey_file(path: &Path, root: &Path) -> FileOutcome {
    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(e) => {
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                error: Error::io("Failed to read survey document", e),
            };
        }
    };

    match parse_survey_document(path, &contents) {
        Ok((mut lake, fish_counts_reshaped)) => {
            let source_key = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            let survey_ids_generated = assign_survey_ids(&mut lake, &source_key);
            FileOutcome::Loaded {
                lake,
                fish_counts_reshaped,
                survey_ids_generated,
            }
        }
        Err(error) => FileOutcome::Skipped {
            path: path.to_path_buf(),
            error,
        },
    }
}

/// Check if a path looks like a survey document
///
/// The extension is case-sensitive: `lake.JSON` is not picked up.
fn is_survey_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == SURVEY_FILE_EXTENSION)
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Loading survey documents...");
    pb
}
