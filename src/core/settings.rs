//=========================================================================
// Scene Loader Settings
//=========================================================================
//
// Optional configuration resource for the scene loader.
//
// The settings are looked up by resource path at every load request, so
// edits to the backing file apply to the next request. A missing or
// unusable resource is never an error: the loading screen is skipped.
//
// Sources:
//   NoSettings          → always absent
//   SceneLoaderSettings → fixed in-memory settings
//   ResourceDirectory   → <root>/<resource path>.toml (+ env override)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

//=== Constants ===========================================================

/// Resource path the loader uses to look up its settings.
pub const SETTINGS_RESOURCE_PATH: &str = "Settings/SceneLoaderManagerSettings";

/// Environment variable overriding the loading-screen scene path.
pub const LOADING_SCREEN_ENV: &str = "SCENE_LOADER_LOADING_SCREEN";

//=== SceneLoaderSettings =================================================

/// Settings resource for [`crate::core::scene::SceneLoaderManager`].
///
/// ```toml
/// loading_screen_scene_path = "Scenes/Loading"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLoaderSettings {
    /// Scene switched to synchronously before the requested loads start.
    pub loading_screen_scene_path: Option<String>,
}

impl SceneLoaderSettings {
    /// Settings with the given loading-screen scene.
    pub fn with_loading_screen(path: impl Into<String>) -> Self {
        Self {
            loading_screen_scene_path: Some(path.into()),
        }
    }

    /// Loading-screen path, if one is configured and not blank.
    pub fn loading_screen(&self) -> Option<&str> {
        self.loading_screen_scene_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }
}

//=== SettingsSource Trait ================================================

/// Lookup of the optional settings resource.
pub trait SettingsSource {
    /// Returns the settings stored at `resource_path`, or `None` when the
    /// resource does not exist or cannot be used.
    fn load_settings(&self, resource_path: &str) -> Option<SceneLoaderSettings>;
}

impl SettingsSource for SceneLoaderSettings {
    fn load_settings(&self, _resource_path: &str) -> Option<SceneLoaderSettings> {
        Some(self.clone())
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn load_settings(&self, resource_path: &str) -> Option<SceneLoaderSettings> {
        (**self).load_settings(resource_path)
    }
}

/// Source without any settings resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettings;

impl SettingsSource for NoSettings {
    fn load_settings(&self, _resource_path: &str) -> Option<SceneLoaderSettings> {
        None
    }
}

//=== ResourceDirectory ===================================================

/// Settings read from TOML files below a resource root directory.
///
/// The resource path `Settings/SceneLoaderManagerSettings` maps to
/// `<root>/Settings/SceneLoaderManagerSettings.toml`. When the
/// [`LOADING_SCREEN_ENV`] variable is set, it replaces the configured
/// loading-screen path (an empty value disables the loading screen).
#[derive(Debug, Clone)]
pub struct ResourceDirectory {
    root: PathBuf,
}

impl ResourceDirectory {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory resources are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing the given resource path.
    pub fn resource_file(&self, resource_path: &str) -> PathBuf {
        self.root.join(resource_path).with_extension("toml")
    }

    fn read_file(&self, resource_path: &str) -> Option<SceneLoaderSettings> {
        let path = self.resource_file(resource_path);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No scene loader settings at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read scene loader settings {}: {}", path.display(), e);
                return None;
            }
        };

        match toml::from_str::<SceneLoaderSettings>(&text) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("Ignoring malformed scene loader settings {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl SettingsSource for ResourceDirectory {
    fn load_settings(&self, resource_path: &str) -> Option<SceneLoaderSettings> {
        let file = self.read_file(resource_path);
        apply_env_override(file, std::env::var(LOADING_SCREEN_ENV).ok())
    }
}

fn apply_env_override(
    settings: Option<SceneLoaderSettings>,
    loading_screen: Option<String>,
) -> Option<SceneLoaderSettings> {
    match loading_screen {
        Some(path) => {
            debug!("Loading screen overridden by {}: {:?}", LOADING_SCREEN_ENV, path);
            let mut settings = settings.unwrap_or_default();
            settings.loading_screen_scene_path = Some(path);
            Some(settings)
        }
        None => settings,
    }
}

//=== Tests ===============================================================
