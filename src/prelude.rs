//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_scene_loader::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Scene loading
pub use crate::core::scene::{
    LoadHandle, LoadSceneMode, SceneHost, SceneId, SceneLoadError, SceneLoaderManager,
    ScenesLoadingState, ValidationError,
};

// Settings resource
pub use crate::core::settings::{
    NoSettings, ResourceDirectory, SceneLoaderSettings, SettingsSource, SETTINGS_RESOURCE_PATH,
};

// Engine bridge
pub use crate::core::host_bridge::{
    scene_channel, ChannelHost, ChannelHostError, LoadTracker, SceneCommand,
    SceneCommandCollector, SharedLoadHandle, TickControl,
};
