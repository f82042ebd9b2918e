//=========================================================================
// Scene Loader Manager
//=========================================================================
//
// Facade that turns a list of scene names into host load calls and keeps
// the resulting aggregate state as "current".
//
// Request pipeline:
//   1. Validate names (no host call on failure)
//   2. Switch to the configured loading screen, if any
//   3. Issue one load per scene: index 0 exclusive, the rest additive
//   4. Publish a new ScenesLoadingState as current and return it
//
// The manager is an owned context object. Independent instances do not
// share state, and nothing here spawns threads or blocks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::validation::{self, ValidationError};
use super::{LoadSceneMode, SceneHost, SceneId, ScenesLoadingState};
use crate::core::settings::{NoSettings, SettingsSource, SETTINGS_RESOURCE_PATH};

//=== SceneLoadError ======================================================

/// Failure of a load request.
///
/// Argument errors are detected before the host is touched. Host failures
/// are passed through unchanged.
#[derive(Debug, Error)]
pub enum SceneLoadError<E: std::error::Error + 'static> {
    /// The scene list argument was absent.
    #[error("scene list is missing")]
    MissingSceneList,

    /// The scene list contained an absent or empty name.
    #[error("scene list contains an absent or empty name at index {index}")]
    InvalidSceneElement { index: usize },

    /// A single scene name was absent, empty or whitespace-only.
    #[error("scene name is missing or blank")]
    BlankSceneName,

    /// Error reported by the host engine.
    #[error(transparent)]
    Host(E),
}

impl<E: std::error::Error + 'static> SceneLoadError<E> {
    /// Whether the request was rejected before any host call.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Host(_))
    }
}

impl<E: std::error::Error + 'static> From<ValidationError> for SceneLoadError<E> {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingSceneList => Self::MissingSceneList,
            ValidationError::InvalidSceneElement { index } => Self::InvalidSceneElement { index },
            ValidationError::BlankSceneName => Self::BlankSceneName,
        }
    }
}

/// Result of a load request on a manager driving host `H`.
pub type LoadResult<H> =
    Result<Arc<ScenesLoadingState<<H as SceneHost>::Handle>>, SceneLoadError<<H as SceneHost>::Error>>;

//=== SceneLoaderManager ==================================================

/// Loads batches of scenes through a [`SceneHost`] and tracks the latest
/// batch's progress.
///
/// # Example
///
/// ```rust
/// # use aetheric_scene_loader::prelude::*;
/// let (host, mut collector) = scene_channel(16);
/// let mut loader = SceneLoaderManager::with_settings(
///     host,
///     SceneLoaderSettings::with_loading_screen("Loading"),
/// );
///
/// let state = loader.load_scenes(&["Main", "HUD"]).unwrap();
/// assert_eq!(state.len(), 2);
/// assert!(!state.is_done());
///
/// // Engine side: apply the commands and report completion.
/// collector.collect_frame();
/// for command in collector.take_commands() {
///     if let SceneCommand::LoadScene { tracker, .. } = command {
///         tracker.complete();
///     }
/// }
/// assert!(loader.current_scenes_loading_state().is_done());
/// ```
pub struct SceneLoaderManager<H: SceneHost, C = NoSettings> {
    host: H,
    settings: C,
    settings_resource_path: String,
    current: Arc<ScenesLoadingState<H::Handle>>,
}

impl<H: SceneHost> SceneLoaderManager<H, NoSettings> {
    //--- Construction -----------------------------------------------------

    /// Creates a manager without a settings resource.
    pub fn new(host: H) -> Self {
        Self::with_settings(host, NoSettings)
    }
}

impl<H: SceneHost, C: SettingsSource> SceneLoaderManager<H, C> {
    /// Creates a manager that looks up its settings in `settings`.
    ///
    /// The current state starts as the empty sentinel.
    pub fn with_settings(host: H, settings: C) -> Self {
        Self {
            host,
            settings,
            settings_resource_path: SETTINGS_RESOURCE_PATH.to_owned(),
            current: Arc::new(ScenesLoadingState::empty()),
        }
    }

    /// Overrides the resource path used for the settings lookup.
    pub fn with_settings_resource_path(mut self, path: impl Into<String>) -> Self {
        self.settings_resource_path = path.into();
        self
    }

    //--- Accessors --------------------------------------------------------

    /// Most recently produced loading state, or the empty sentinel.
    pub fn current_scenes_loading_state(&self) -> Arc<ScenesLoadingState<H::Handle>> {
        Arc::clone(&self.current)
    }

    /// Resource path the settings are looked up at.
    pub fn settings_resource_path(&self) -> &str {
        &self.settings_resource_path
    }

    /// Host the load calls are issued to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the manager and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    //--- Load Requests ----------------------------------------------------

    /// Loads a single scene exclusively.
    ///
    /// Rejects empty and whitespace-only names before touching the host.
    pub fn load_scene(&mut self, name: &str) -> LoadResult<H> {
        let scene = validation::validate_scene_name(Some(name))?;
        self.dispatch(vec![scene])
    }

    /// Loads all `names`: the first exclusively, the rest additively.
    ///
    /// Fails with [`SceneLoadError::InvalidSceneElement`] if a name is
    /// empty. An empty list is accepted and yields a state that is
    /// already done.
    pub fn load_scenes<S: AsRef<str>>(&mut self, names: &[S]) -> LoadResult<H> {
        let scenes = validation::validate_scenes(names)?;
        self.dispatch(scenes)
    }

    /// Nullable form of [`Self::load_scenes`] for bindings layers.
    ///
    /// `None` for the whole list and `None` for an element are reported
    /// as distinct errors. `Some("")` is rejected like `None`, so both
    /// list forms agree on which names reach the host.
    pub fn load_scene_list<S: AsRef<str>>(&mut self, names: Option<&[Option<S>]>) -> LoadResult<H> {
        let scenes = validation::validate_scene_list(names)?;
        self.dispatch(scenes)
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch(&mut self, scenes: Vec<SceneId>) -> LoadResult<H> {
        self.show_loading_screen()?;

        let mut handles = Vec::with_capacity(scenes.len());
        for (index, scene) in scenes.iter().enumerate() {
            let mode = LoadSceneMode::for_index(index);
            debug!("Loading scene {} ({:?})", scene, mode);

            let handle = self
                .host
                .load_scene_async(scene, mode)
                .map_err(SceneLoadError::Host)?;
            handles.push(handle);
        }

        info!("Started loading {} scene(s)", handles.len());

        let state = Arc::new(ScenesLoadingState::new(handles));
        self.current = Arc::clone(&state);
        Ok(state)
    }

    fn show_loading_screen(&mut self) -> Result<(), SceneLoadError<H::Error>> {
        let Some(settings) = self.settings.load_settings(&self.settings_resource_path) else {
            return Ok(());
        };

        if let Some(path) = settings.loading_screen() {
            debug!("Switching to loading screen {}", path);
            self.host.switch_scene(path).map_err(SceneLoadError::Host)?;
        }

        Ok(())
    }
}

//=== Tests ===============================================================
