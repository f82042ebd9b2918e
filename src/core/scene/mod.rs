//=========================================================================
// Scene System
//=========================================================================
//
// Batch scene loading on top of an engine-provided asynchronous loader.
//
// Architecture:
//   SceneLoaderManager
//     ├─ host: SceneHost          (engine port: switch / load async)
//     ├─ settings: SettingsSource (optional loading-screen config)
//     └─ current: Arc<ScenesLoadingState<Handle>>
//
// Flow:
//   load_scenes() → validation → [loading screen] → N host loads
//                 → ScenesLoadingState → stored as current → returned
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::Arc;

//=== Module Declarations =================================================

mod loading_state;
mod scene_loader;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

//=== Public API ==========================================================

pub use loading_state::ScenesLoadingState;
pub use scene_loader::{LoadResult, SceneLoadError, SceneLoaderManager};
pub use validation::ValidationError;

//=== Scene Identifier ====================================================

/// Name of a scene resource known to the host engine.
///
/// The loader never interprets the contents. The only guarantee a
/// `SceneId` carries is that it is not empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(String);

impl SceneId {
    /// Creates a scene identifier, rejecting empty and whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankSceneName);
        }
        Ok(Self(name))
    }

    /// Wraps a name that already passed list validation.
    ///
    /// List elements are only checked for presence, so whitespace-only
    /// names reach the host unchanged.
    pub(crate) fn from_validated(name: String) -> Self {
        Self(name)
    }

    /// Returns the identifier as passed to the host.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SceneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//=== Load Mode ===========================================================

/// How a scene load interacts with the scenes already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadSceneMode {
    /// Replaces every currently loaded scene.
    Exclusive,

    /// Loads alongside the currently loaded scenes.
    Additive,
}

impl LoadSceneMode {
    /// Mode used for the scene at `index` within one batch request.
    ///
    /// The first scene replaces the current scene set, the rest are added.
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Exclusive
        } else {
            Self::Additive
        }
    }
}

//=== Load Handle Trait ===================================================

/// Progress view over one in-flight scene load issued by the host.
pub trait LoadHandle {
    /// Load progress as a fraction in `0.0..=1.0`.
    fn progress(&self) -> f32;

    /// Whether the host finished loading the scene.
    fn is_done(&self) -> bool;
}

impl<H: LoadHandle + ?Sized> LoadHandle for &H {
    fn progress(&self) -> f32 {
        (**self).progress()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<H: LoadHandle + ?Sized> LoadHandle for Arc<H> {
    fn progress(&self) -> f32 {
        (**self).progress()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<H: LoadHandle + ?Sized> LoadHandle for Box<H> {
    fn progress(&self) -> f32 {
        (**self).progress()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

//=== Scene Host Trait ====================================================

/// Engine-side scene loading services used by [`SceneLoaderManager`].
///
/// Implementations adapt a concrete engine. Every call only dispatches
/// work; the engine's own scheduler performs the actual loading.
///
/// # Minimal Implementation
///
/// ```rust
/// # use aetheric_scene_loader::prelude::*;
/// # use std::convert::Infallible;
/// struct Done;
///
/// impl LoadHandle for Done {
///     fn progress(&self) -> f32 { 1.0 }
///     fn is_done(&self) -> bool { true }
/// }
///
/// struct InstantHost;
///
/// impl SceneHost for InstantHost {
///     type Handle = Done;
///     type Error = Infallible;
///
///     fn switch_scene(&mut self, _path: &str) -> Result<(), Infallible> {
///         Ok(())
///     }
///
///     fn load_scene_async(
///         &mut self,
///         _scene: &SceneId,
///         _mode: LoadSceneMode,
///     ) -> Result<Done, Infallible> {
///         Ok(Done)
///     }
/// }
/// ```
pub trait SceneHost {
    /// Handle returned for every issued load.
    type Handle: LoadHandle;

    /// Failure reported by the engine. Passed through to callers untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Switches to the scene at `path` exclusively, before any later call
    /// takes effect.
    fn switch_scene(&mut self, path: &str) -> Result<(), Self::Error>;

    /// Starts loading `scene` in the given mode and returns its handle.
    fn load_scene_async(
        &mut self,
        scene: &SceneId,
        mode: LoadSceneMode,
    ) -> Result<Self::Handle, Self::Error>;
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_id_rejects_blank_names() {
        assert_eq!(SceneId::new(""), Err(ValidationError::BlankSceneName));
        assert_eq!(SceneId::new(" \t\n"), Err(ValidationError::BlankSceneName));
    }

    #[test]
    fn scene_id_keeps_name_verbatim() {
        let id = SceneId::new(" Main ").unwrap();
        assert_eq!(id.as_str(), " Main ");
        assert_eq!(id.to_string(), " Main ");
    }

    #[test]
    fn first_index_is_exclusive_rest_additive() {
        assert_eq!(LoadSceneMode::for_index(0), LoadSceneMode::Exclusive);
        assert_eq!(LoadSceneMode::for_index(1), LoadSceneMode::Additive);
        assert_eq!(LoadSceneMode::for_index(7), LoadSceneMode::Additive);
    }

    #[test]
    fn handle_forwarding_through_arc_and_ref() {
        struct Half;
        impl LoadHandle for Half {
            fn progress(&self) -> f32 {
                0.5
            }
            fn is_done(&self) -> bool {
                false
            }
        }

        let shared = Arc::new(Half);
        assert_eq!(shared.progress(), 0.5);
        assert!(!(&Half).is_done());
        let boxed: Box<dyn LoadHandle> = Box::new(Half);
        assert_eq!(boxed.progress(), 0.5);
    }
}
