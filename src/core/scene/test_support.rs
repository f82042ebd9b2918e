//=========================================================================
// Test Support
//=========================================================================
//
// Fake host and handles shared by the scene module tests.
//
//=========================================================================

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use super::{LoadHandle, LoadSceneMode, SceneHost, SceneId};

//=== Handles =============================================================

/// Handle with fixed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FixedHandle {
    progress: f32,
    done: bool,
}

impl FixedHandle {
    pub(crate) fn new(progress: f32, done: bool) -> Self {
        Self { progress, done }
    }
}

impl LoadHandle for FixedHandle {
    fn progress(&self) -> f32 {
        self.progress
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Handle whose values the test can change after it was issued.
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualHandle {
    progress: Rc<Cell<f32>>,
    done: Rc<Cell<bool>>,
}

impl ManualHandle {
    pub(crate) fn set(&self, progress: f32, done: bool) {
        self.progress.set(progress);
        self.done.set(done);
    }
}

impl LoadHandle for ManualHandle {
    fn progress(&self) -> f32 {
        self.progress.get()
    }

    fn is_done(&self) -> bool {
        self.done.get()
    }
}

//=== RecordingHost =======================================================

/// Call observed by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    Switch(String),
    Load(LoadSceneMode, String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene {0}")]
pub(crate) struct UnknownScene(pub(crate) String);

/// Host that records every call and hands out manual handles.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) calls: Vec<HostCall>,
    pub(crate) issued: Vec<ManualHandle>,
    pub(crate) unknown: Vec<String>,
}

impl RecordingHost {
    /// Host that fails loads for the given scene names.
    pub(crate) fn rejecting(unknown: &[&str]) -> Self {
        Self {
            unknown: unknown.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl SceneHost for RecordingHost {
    type Handle = ManualHandle;
    type Error = UnknownScene;

    fn switch_scene(&mut self, path: &str) -> Result<(), UnknownScene> {
        self.calls.push(HostCall::Switch(path.to_owned()));
        Ok(())
    }

    fn load_scene_async(
        &mut self,
        scene: &SceneId,
        mode: LoadSceneMode,
    ) -> Result<ManualHandle, UnknownScene> {
        self.calls.push(HostCall::Load(mode, scene.to_string()));
        if self.unknown.iter().any(|name| name == scene.as_str()) {
            return Err(UnknownScene(scene.to_string()));
        }
        let handle = ManualHandle::default();
        self.issued.push(handle.clone());
        Ok(handle)
    }
}
