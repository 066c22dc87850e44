//! Per-run configuration shared by all passes.

use crate::error::TransformError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Options recognised by the pipeline's owner.
///
/// The passes themselves do not consult these flags; the orchestrator reads
/// them to decide which passes go into a `Pipeline`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformSettings {
    /// Emitting a self-contained, recompilable project. Marker removal and
    /// embedded-type stripping are only wanted in this mode.
    pub export_full_project: bool,
    /// Opt-in identifier escaping.
    pub escape_invalid_identifiers: bool,
}

impl TransformSettings {
    pub fn from_json(text: &str) -> Result<TransformSettings, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Cooperative abort flag, cheap to clone and share with another thread.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Read-only context for one pipeline run.
#[derive(Clone, Debug, Default)]
pub struct TransformContext {
    settings: TransformSettings,
    cancellation: CancellationToken,
}

impl TransformContext {
    pub fn new(settings: TransformSettings) -> TransformContext {
        TransformContext {
            settings,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> TransformContext {
        self.cancellation = token;
        self
    }

    pub fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    /// Abort point checked between node visits and between passes.
    #[inline]
    pub fn check_cancelled(&self) -> Result<(), TransformError> {
        if self.cancellation.is_cancelled() {
            Err(TransformError::Cancelled)
        } else {
            Ok(())
        }
    }
}
