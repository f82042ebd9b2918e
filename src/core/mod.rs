//=========================================================================
// Core Systems
//=========================================================================
//
// Scene loading facade and the pieces it is wired to.
//
// Architecture:
//   scene        → SceneLoaderManager, ScenesLoadingState, validation,
//                  SceneHost / LoadHandle traits
//   settings     → optional loading-screen configuration resource
//   host_bridge  → SceneHost over a crossbeam channel to an engine thread
//
// Notes:
// The facade never blocks and never spawns threads. Concurrency, if any,
// lives on the engine side of the host bridge.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod host_bridge;
pub mod scene;
pub mod settings;

//=== Public API ==========================================================

pub use host_bridge::{scene_channel, ChannelHost, SceneCommand, SceneCommandCollector};
pub use scene::{LoadHandle, LoadSceneMode, SceneHost, SceneId, SceneLoaderManager};
pub use settings::{SceneLoaderSettings, SettingsSource};

//=========================================================================
// Integration Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::thread;

    use super::host_bridge::{ChannelHostError, TickControl};
    use super::scene::SceneLoadError;
    use super::*;

    //--- Engine stand-in --------------------------------------------------
    //
    // Applies commands on its own thread: the loading-screen switch is
    // recorded, every load is completed in two progress steps.
    //
    fn spawn_engine(mut collector: SceneCommandCollector) -> thread::JoinHandle<Vec<String>> {
        thread::spawn(move || {
            let mut applied = Vec::new();
            loop {
                let control = collector.collect_frame();
                for command in collector.take_commands() {
                    match command {
                        SceneCommand::SwitchScene { path } => applied.push(format!("switch {path}")),
                        SceneCommand::LoadScene { scene, mode, tracker } => {
                            applied.push(format!("{mode:?} {scene}"));
                            tracker.set_progress(0.5);
                            tracker.complete();
                        }
                    }
                }
                if control == TickControl::Exit {
                    break;
                }
            }
            applied
        })
    }

    #[test]
    fn loads_through_engine_thread() {
        let (host, collector) = scene_channel(8);
        let engine = spawn_engine(collector);

        let mut loader = SceneLoaderManager::with_settings(
            host,
            SceneLoaderSettings::with_loading_screen("Loading"),
        );
        let state = loader.load_scenes(&["Main", "HUD"]).unwrap();
        assert_eq!(state.len(), 2);

        // Dropping the loader disconnects the channel and stops the engine
        // once it has applied everything sent so far.
        drop(loader);
        let applied = engine.join().unwrap();

        assert_eq!(applied, ["switch Loading", "Exclusive Main", "Additive HUD"]);
        assert!(state.is_done());
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn batch_larger_than_channel_fails_without_blocking() {
        let (host, mut collector) = scene_channel(2);
        let mut loader = SceneLoaderManager::with_settings(
            host,
            SceneLoaderSettings::with_loading_screen("Loading"),
        );

        // Switch + "A" fill the channel; "B" does not fit.
        let err = loader.load_scenes(&["A", "B", "C"]).unwrap_err();
        assert!(matches!(err, SceneLoadError::Host(ChannelHostError::Full)));
        assert!(loader.current_scenes_loading_state().is_empty());

        // Draining on the same thread frees room for the next request.
        collector.collect_frame();
        assert_eq!(collector.take_commands().len(), 2);
        let state = loader.load_scene("A").unwrap();
        assert_eq!(state.len(), 1);
    }
}
