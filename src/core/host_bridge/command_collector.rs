//=========================================================================
// Command Collector
//=========================================================================
//
// Engine-side scene command collector with bounded polling and shutdown
// detection.
//
// Architecture:
//   Receiver<SceneCommand> → collect_frame() → commands → TickControl
//
// Bounded polling prevents starvation. Idle sleep reduces CPU usage.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::SceneCommand;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== SceneCommandCollector ===============================================

/// Collects scene commands for one engine tick.
pub struct SceneCommandCollector {
    receiver: Receiver<SceneCommand>,
    commands: Vec<SceneCommand>,
}

impl SceneCommandCollector {
    const MAX_COMMANDS_PER_FRAME: usize = 100;
    const IDLE_SLEEP_MS: u64 = 10;

    pub fn new(receiver: Receiver<SceneCommand>) -> Self {
        Self {
            receiver,
            commands: Vec::with_capacity(4),
        }
    }

    /// Collects pending commands (bounded to prevent starvation).
    ///
    /// Returns [`TickControl::Exit`] once every [`super::ChannelHost`] is
    /// gone and the queue is drained. Commands received before the
    /// disconnect remain available through [`Self::commands`].
    pub fn collect_frame(&mut self) -> TickControl {
        self.commands.clear();
        let mut drained = 0;

        while drained < Self::MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(command) => {
                    self.commands.push(command);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_COMMANDS_PER_FRAME {
            warn!("Scene command backlog: drained {} commands this frame", drained);
        }

        if drained == 0 {
            thread::sleep(Duration::from_millis(Self::IDLE_SLEEP_MS));
        }

        TickControl::Continue
    }

    /// Commands collected this frame, in issue order.
    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    /// Takes ownership of collected commands, leaving an empty vec.
    pub fn take_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.commands)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
