//=========================================================================
// Scenes Loading State
//=========================================================================
//
// Immutable aggregate over the handles issued for one load request.
//
// Every request produces a fresh state. The manager keeps the latest one
// as "current"; older states stay valid for whoever still holds them.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::LoadHandle;

//=== ScenesLoadingState ==================================================

/// Aggregate progress of one batch of scene loads.
///
/// Holds exactly one handle per requested scene, in request order.
/// The handle set never changes after construction.
#[derive(Debug)]
pub struct ScenesLoadingState<H> {
    handles: Box<[H]>,
}

impl<H> ScenesLoadingState<H> {
    //--- Construction -----------------------------------------------------

    /// Wraps the handles issued for one request.
    pub fn new(handles: impl Into<Box<[H]>>) -> Self {
        Self {
            handles: handles.into(),
        }
    }

    /// State with no handles; reports done at full progress.
    pub fn empty() -> Self {
        Self {
            handles: Box::new([]),
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Number of scenes tracked by this state.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true for the empty sentinel state.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handles in request order.
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Iterates over the handles in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, H> {
        self.handles.iter()
    }
}

impl<H: LoadHandle> ScenesLoadingState<H> {
    //--- Aggregate Queries ------------------------------------------------

    /// True once every handle reports completion. Trivially true when empty.
    pub fn is_done(&self) -> bool {
        self.handles.iter().all(LoadHandle::is_done)
    }

    /// Arithmetic mean of the handles' progress, `1.0` when empty.
    ///
    /// Values outside `0.0..=1.0` are clamped and NaN counts as zero.
    pub fn progress(&self) -> f32 {
        if self.handles.is_empty() {
            return 1.0;
        }

        let total: f32 = self
            .handles
            .iter()
            .map(|handle| clamp_fraction(handle.progress()))
            .sum();

        total / self.handles.len() as f32
    }
}

impl<H> Default for ScenesLoadingState<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, H> IntoIterator for &'a ScenesLoadingState<H> {
    type Item = &'a H;
    type IntoIter = std::slice::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}

fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

//=== Tests ===============================================================
