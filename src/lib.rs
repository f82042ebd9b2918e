//=========================================================================
// Aetheric Scene Loader — Library Root
//
// Batch scene loading on top of an engine's asynchronous scene loader.
//
// Responsibilities:
// - Validate requested scene names before anything reaches the engine
// - Optionally switch to a configured loading-screen scene first
// - Issue one load per scene (first exclusive, the rest additive)
// - Expose the aggregate progress of the latest batch
//
// Typical usage:
// ```no_run
// use aetheric_scene_loader::prelude::*;
//
// let (host, _collector) = scene_channel(64);
// let mut loader = SceneLoaderManager::with_settings(
//     host,
//     ResourceDirectory::new("assets"),
// );
// let state = loader.load_scenes(&["Main", "HUD"]).unwrap();
// println!("{:.0}%", state.progress() * 100.0);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the loader facade, its host-facing traits, the settings
// resource and the channel bridge to an engine logic thread.
//
pub mod core;

//--- Prelude -------------------------------------------------------------
//
// Re-exports of the types most callers need.
//
pub mod prelude;
