#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Behavior capabilities that plug into the world's turn scheduler.
//!
//! Brains are invoked once per computer-controlled turn and resolve their
//! decisions by calling back into the world's movement primitives. The
//! scheduler never inspects a brain's internals, so richer AI drops in
//! without touching the world crate.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_core::Coord;
use warren_world::{ActorId, Brain, World};

/// Movement action understood by [`Brain::perform_action`] implementations
/// in this crate: one step toward decreasing `y`.
pub const ACTION_MOVE_UP: &str = "move_up";
/// One step toward increasing `y`.
pub const ACTION_MOVE_DOWN: &str = "move_down";
/// One step toward decreasing `x`.
pub const ACTION_MOVE_LEFT: &str = "move_left";
/// One step toward increasing `x`.
pub const ACTION_MOVE_RIGHT: &str = "move_right";

/// Brain that never does anything; the placeholder behavior for actors whose
/// real AI has not been written yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleBrain;

impl Brain for IdleBrain {
    fn act(&mut self, _actor: ActorId, _pos: Coord, _world: &mut World) {}

    fn perform_action(&mut self, _action: &str, _actor: ActorId, _pos: Coord, _world: &mut World) {}
}

/// Brain that drifts one step in a random direction each turn.
///
/// The walk is seeded, so a given seed always produces the same wandering
/// pattern on the same map. When every neighboring cell is blocked the actor
/// stands still for the turn.
#[derive(Clone, Debug)]
pub struct WanderBrain {
    rng: ChaCha8Rng,
}

impl WanderBrain {
    /// Creates a wandering brain from a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Brain for WanderBrain {
    fn act(&mut self, actor: ActorId, pos: Coord, world: &mut World) {
        let mut steps = [pos.up(), pos.down(), pos.left(), pos.right()];
        steps.shuffle(&mut self.rng);
        for target in steps {
            if world.try_move_actor(target, actor) {
                break;
            }
        }
    }

    fn perform_action(&mut self, action: &str, actor: ActorId, pos: Coord, world: &mut World) {
        let _ = perform_move(action, actor, pos, world);
    }
}

/// Resolves one of the movement action names against the world, reporting
/// whether the step was taken.
///
/// Unknown action names resolve to `false`; the action vocabulary is owned
/// by the brains, not by the world.
pub fn perform_move(action: &str, actor: ActorId, pos: Coord, world: &mut World) -> bool {
    let target = match action {
        ACTION_MOVE_UP => pos.up(),
        ACTION_MOVE_DOWN => pos.down(),
        ACTION_MOVE_LEFT => pos.left(),
        ACTION_MOVE_RIGHT => pos.right(),
        _ => return false,
    };
    world.try_move_actor(target, actor)
}
