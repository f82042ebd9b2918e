//=========================================================================
// Load Tracker
//=========================================================================
//
// Shared progress cell for one scene load crossing the thread boundary.
//
// Architecture:
//   LoadTracker (engine writes) ──Arc<LoadCell>── SharedLoadHandle (loader polls)
//
// Progress is stored as f32 bits in an AtomicU32; no locks involved.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::scene::LoadHandle;

//=== LoadCell ============================================================

struct LoadCell {
    progress: AtomicU32,
    done: AtomicBool,
}

impl LoadCell {
    fn new() -> Self {
        Self {
            progress: AtomicU32::new(0.0f32.to_bits()),
            done: AtomicBool::new(false),
        }
    }

    fn progress(&self) -> f32 {
        f32::from_bits(self.progress.load(Ordering::Acquire))
    }

    fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

//=== LoadTracker =========================================================

/// Engine-side writer for one scene load.
#[derive(Clone)]
pub struct LoadTracker {
    cell: Arc<LoadCell>,
}

impl LoadTracker {
    /// Creates a tracker and the handle observing it.
    pub fn new() -> (Self, SharedLoadHandle) {
        let cell = Arc::new(LoadCell::new());
        (
            Self {
                cell: Arc::clone(&cell),
            },
            SharedLoadHandle { cell },
        )
    }

    /// Reports load progress. Values are clamped to `0.0..=1.0`; NaN is
    /// ignored.
    pub fn set_progress(&self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        let progress = progress.clamp(0.0, 1.0);
        self.cell.progress.store(progress.to_bits(), Ordering::Release);
    }

    /// Marks the load finished at full progress.
    pub fn complete(&self) {
        self.cell.progress.store(1.0f32.to_bits(), Ordering::Release);
        self.cell.done.store(true, Ordering::Release);
    }

    /// Last reported progress.
    pub fn progress(&self) -> f32 {
        self.cell.progress()
    }

    /// Whether [`Self::complete`] was called.
    pub fn is_done(&self) -> bool {
        self.cell.is_done()
    }
}

impl fmt::Debug for LoadTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadTracker")
            .field("progress", &self.progress())
            .field("done", &self.is_done())
            .finish()
    }
}

//=== SharedLoadHandle ====================================================

/// Loader-side read view of a [`LoadTracker`].
#[derive(Clone)]
pub struct SharedLoadHandle {
    cell: Arc<LoadCell>,
}

impl LoadHandle for SharedLoadHandle {
    fn progress(&self) -> f32 {
        self.cell.progress()
    }

    fn is_done(&self) -> bool {
        self.cell.is_done()
    }
}

impl fmt::Debug for SharedLoadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLoadHandle")
            .field("progress", &self.cell.progress())
            .field("done", &self.cell.is_done())
            .finish()
    }
}

//=== Tests ===============================================================
