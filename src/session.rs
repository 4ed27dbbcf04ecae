//! Shared, serialized access to one board.
//!
//! `Board` methods already run atomically under `&mut self`. A session is
//! what you hand out when more than one task may write, such as several
//! image files finishing their encoding at different times.

use crate::{
    domain::{
        board::{Board, Outcome},
        intent::BoardIntent,
        item::{ContentRef, ItemId},
    },
    error::{Result, TierListError},
    export::ExportSnapshot,
    ingest::{ContentEncoder, DataUriEncoder},
};
use std::{path::PathBuf, sync::Arc};
use tokio::{sync::Mutex, task::JoinSet};

/// Per-file result of an ingestion batch
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Files that became bank items, in the order they were appended
    pub added: Vec<(PathBuf, ItemId)>,
    pub failed: Vec<(PathBuf, TierListError)>,
}

/// One user's board behind an exclusive lock
#[derive(Clone)]
pub struct RankingSession {
    board: Arc<Mutex<Board>>,
    encoder: Arc<dyn ContentEncoder>,
}

impl RankingSession {
    pub fn new(board: Board) -> Self {
        Self::with_encoder(board, DataUriEncoder)
    }

    pub fn with_encoder(board: Board, encoder: impl ContentEncoder + 'static) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            encoder: Arc::new(encoder),
        }
    }

    /// Runs `f` with exclusive access to the board
    pub async fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut board = self.board.lock().await;
        f(&mut *board)
    }

    pub async fn apply(&self, intent: BoardIntent) -> Outcome {
        self.board.lock().await.apply(intent)
    }

    pub async fn add_item(&self, content: ContentRef) -> ItemId {
        self.board.lock().await.add_item(content)
    }

    pub async fn snapshot(&self) -> Board {
        self.board.lock().await.snapshot()
    }

    pub async fn export_snapshot(&self) -> ExportSnapshot {
        ExportSnapshot::from_board(&*self.board.lock().await)
    }

    /// Encodes every file concurrently and appends one bank item per success.
    ///
    /// Items land in completion order. A failing file never blocks the rest.
    pub async fn ingest_files(&self, paths: impl IntoIterator<Item = PathBuf>) -> IngestReport {
        let mut tasks = JoinSet::new();
        for path in paths {
            let board = Arc::clone(&self.board);
            let encoder = Arc::clone(&self.encoder);
            tasks.spawn(async move {
                let result = match encoder.encode(&path).await {
                    Ok(content) => Ok(board.lock().await.add_item(content)),
                    Err(e) => Err(e),
                };
                (path, result)
            });
        }

        let mut report = IngestReport::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((path, Ok(id))) => report.added.push((path, id)),
                Ok((path, Err(e))) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to ingest file");
                    report.failed.push((path, e));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "ingest task did not finish");
                }
            }
        }

        tracing::debug!(
            added = report.added.len(),
            failed = report.failed.len(),
            "ingest batch finished"
        );
        report
    }

    /// Fails if the board's id invariants have been broken
    pub async fn verify(&self) -> Result<()> {
        self.board.lock().await.check_invariants()
    }
}
