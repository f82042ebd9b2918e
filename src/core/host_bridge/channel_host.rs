//=========================================================================
// Channel Host
//=========================================================================
//
// `SceneHost` implementation that forwards every call to the engine's
// logic thread as a `SceneCommand`.
//
// Channel order is issue order, so a loading-screen switch sent before a
// batch is applied by the engine before any load of that batch.
//
// Sending never blocks: a full channel is reported as an error.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Sender, TrySendError};
use log::trace;

//=== Internal Dependencies ===============================================

use super::{ChannelHostError, LoadTracker, SceneCommand, SceneCommandCollector, SharedLoadHandle};
use crate::core::scene::{LoadSceneMode, SceneHost, SceneId};

//=== ChannelHost =========================================================

/// Loader-side host sending [`SceneCommand`]s over a crossbeam channel.
#[derive(Debug, Clone)]
pub struct ChannelHost {
    sender: Sender<SceneCommand>,
}

impl ChannelHost {
    /// Creates a host sending into `sender`.
    pub fn new(sender: Sender<SceneCommand>) -> Self {
        Self { sender }
    }

    fn send(&self, command: SceneCommand) -> Result<(), ChannelHostError> {
        trace!("Sending scene command {:?}", command);
        self.sender.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => ChannelHostError::Full,
            TrySendError::Disconnected(_) => ChannelHostError::Disconnected,
        })
    }
}

impl SceneHost for ChannelHost {
    type Handle = SharedLoadHandle;
    type Error = ChannelHostError;

    fn switch_scene(&mut self, path: &str) -> Result<(), ChannelHostError> {
        self.send(SceneCommand::SwitchScene {
            path: path.to_owned(),
        })
    }

    fn load_scene_async(
        &mut self,
        scene: &SceneId,
        mode: LoadSceneMode,
    ) -> Result<SharedLoadHandle, ChannelHostError> {
        let (tracker, handle) = LoadTracker::new();
        self.send(SceneCommand::LoadScene {
            scene: scene.clone(),
            mode,
            tracker,
        })?;
        Ok(handle)
    }
}

//=== Construction ========================================================

/// Creates a connected host / collector pair.
///
/// `capacity` bounds the number of commands in flight. Once the engine
/// falls that far behind, further calls fail with
/// [`ChannelHostError::Full`] instead of waiting for the engine.
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn scene_channel(capacity: usize) -> (ChannelHost, SceneCommandCollector) {
    assert!(capacity > 0, "Channel capacity must be positive");
    let (tx, rx) = bounded(capacity);
    (ChannelHost::new(tx), SceneCommandCollector::new(rx))
}

//=== Tests ===============================================================
