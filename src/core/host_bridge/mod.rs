//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the scene loader with an engine whose scene system runs on its
// own logic thread.
//
// The loader side holds a `ChannelHost` (a `SceneHost`), the engine side
// drains `SceneCommand`s with a `SceneCommandCollector` at tick
// boundaries and reports progress through each command's `LoadTracker`.
//
// Components:
// - `interface`: Command and error types (the contract)
// - `load_tracker`: Shared progress cell behind every issued handle
// - `channel_host`: Loader-side `SceneHost` over a crossbeam channel
// - `command_collector`: Engine-side bounded command drain
//
//=========================================================================

//=== Module Declarations =================================================

mod channel_host;
mod command_collector;
mod interface;
mod load_tracker;

//=== Public API ==========================================================

pub use channel_host::{scene_channel, ChannelHost};
pub use command_collector::{SceneCommandCollector, TickControl};
pub use interface::{ChannelHostError, SceneCommand};
pub use load_tracker::{LoadTracker, SharedLoadHandle};
