//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Loader-to-engine command types and errors.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::LoadTracker;
use crate::core::scene::{LoadSceneMode, SceneId};

//=== SceneCommand ========================================================

/// Commands sent from the loader to the engine, in issue order.
#[derive(Debug, Clone)]
pub enum SceneCommand {
    /// Switch to the scene at `path` exclusively before handling any later
    /// command.
    SwitchScene { path: String },

    /// Start loading `scene`; report progress through `tracker`.
    LoadScene {
        scene: SceneId,
        mode: LoadSceneMode,
        tracker: LoadTracker,
    },
}

//=== ChannelHostError ====================================================

/// Errors raised by [`super::ChannelHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelHostError {
    /// The engine side of the channel was dropped.
    #[error("scene command channel disconnected")]
    Disconnected,

    /// The engine has not drained the channel and it is at capacity.
    #[error("scene command channel is full")]
    Full,
}
