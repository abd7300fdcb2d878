#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state for the Warren simulation core.
//!
//! The world owns the wall grid, the exit marker, the round-robin turn
//! queue, and the bidirectional actor-position index. It enforces spatial
//! exclusivity (at most one actor per cell, never on a wall) and drives
//! non-player turns through the [`Brain`] capability until control must
//! return to the caller for a player-controlled actor.

use std::collections::BTreeMap;

use thiserror::Error;
use warren_coll::BidiMap;
use warren_core::{Coord, Grid};

mod actor;

pub use actor::{blueprint, Actor, ActorBlueprint, ActorId, Brain, BLUEPRINTS};

/// Upper bound on consecutive computer-controlled turns dispatched by
/// [`World::handle_npc_turns`] before the safety valve triggers.
pub const NPC_TURN_LIMIT: usize = 30;

/// Outcome of a successfully dispatched turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// A computer-controlled actor completed its turn. Actors without a
    /// behavior capability complete their turn as a no-op.
    Npc {
        /// Actor whose turn completed.
        actor: ActorId,
    },
    /// A player-controlled actor is up; the caller must resolve the turn
    /// externally before stepping again.
    Player {
        /// Actor awaiting player input.
        actor: ActorId,
    },
}

impl Turn {
    /// Actor the turn belongs to, regardless of who resolves it.
    #[must_use]
    pub const fn actor(&self) -> ActorId {
        match self {
            Self::Npc { actor } | Self::Player { actor } => *actor,
        }
    }
}

/// Scheduling signals the caller is expected to branch on every call.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    /// The turn queue holds no live actors.
    #[error("no actors in queue")]
    QueueEmpty,
    /// The NPC turn loop ran its full budget without reaching a player turn;
    /// a guard against turn-order misconfiguration, not a fault.
    #[error("too many consecutive npc turns, relinquishing control")]
    SafetyLimit,
}

/// Authoritative simulation state: wall grid, exit, turn queue, and the
/// actor-position index.
///
/// Removed actors leave a tombstoned queue slot behind rather than
/// compacting the queue, so surviving actors keep their slot indices and the
/// turn cursor stays valid. An actor appears in the position index exactly
/// while it occupies a live queue slot.
#[derive(Debug)]
pub struct World {
    walls: Grid<bool>,
    exit: Coord,
    turn_count: u64,
    next_actor_id: u32,
    actors: BTreeMap<ActorId, Actor>,
    turn_queue: Vec<Option<ActorId>>,
    current_idx: usize,
    positions: BidiMap<ActorId, Coord>,
}

impl World {
    /// Creates a world from a wall grid (`true` = impassable) and the exit
    /// position. The exit is a goal marker, not an obstacle.
    #[must_use]
    pub fn new(walls: Grid<bool>, exit: Coord) -> Self {
        Self {
            walls,
            exit,
            turn_count: 0,
            next_actor_id: 0,
            actors: BTreeMap::new(),
            turn_queue: Vec::new(),
            current_idx: 0,
            positions: BidiMap::new(),
        }
    }

    /// Registers an actor description and allocates its handle.
    ///
    /// Registration alone does not queue the actor; follow up with
    /// [`World::put_actor`] to give it a position and a turn slot.
    pub fn register(&mut self, actor: Actor) -> ActorId {
        let id = ActorId::new(self.next_actor_id);
        self.next_actor_id += 1;
        let _ = self.actors.insert(id, actor);
        id
    }

    /// Places a registered actor on the map and appends it to the turn queue.
    ///
    /// Returns `false` without mutating anything when the handle is unknown
    /// or already queued, when `pos` is a wall or out of bounds, or when a
    /// live actor already occupies `pos`.
    pub fn put_actor(&mut self, pos: Coord, actor: ActorId) -> bool {
        if !self.actors.contains_key(&actor) || self.is_queued(actor) {
            return false;
        }
        if !self.place_on_map(pos, actor) {
            return false;
        }
        self.turn_queue.push(Some(actor));
        true
    }

    /// Removes an actor from the world, destroying its description.
    ///
    /// The actor's queue slot is tombstoned rather than compacted away so
    /// every other actor keeps its slot index and the cursor stays valid.
    /// Returns `false` when the actor is not queued.
    pub fn remove_actor(&mut self, actor: ActorId) -> bool {
        let Some(slot) = self
            .turn_queue
            .iter_mut()
            .find(|slot| **slot == Some(actor))
        else {
            return false;
        };
        *slot = None;
        let _ = self.positions.remove(&actor);
        let _ = self.actors.remove(&actor);
        true
    }

    /// Attempts to relocate a placed actor to `target`.
    ///
    /// Fails when `target` is a wall, out of bounds, or occupied (the
    /// actor's own cell counts as occupied), or when the actor has no
    /// current position. Adjacency is deliberately not validated here;
    /// movement policy belongs to the caller.
    pub fn try_move_actor(&mut self, target: Coord, actor: ActorId) -> bool {
        if !matches!(self.walls.at(target), Ok(&false)) {
            return false;
        }
        if self.positions.contains_value(&target) || !self.positions.contains_key(&actor) {
            return false;
        }
        self.positions.insert(actor, target);
        true
    }

    /// Dispatches the next turn in round-robin order.
    ///
    /// The cursor advances by one slot, wrapping at either end and skipping
    /// tombstones; when a full lap finds no live slot the queue counts as
    /// empty. A player-controlled actor is returned as [`Turn::Player`]
    /// without further action. Otherwise the actor's behavior capability, if
    /// any, takes the turn and may call back into the world's mutation
    /// primitives.
    ///
    /// # Panics
    ///
    /// Panics when a queued actor is missing from the position index or the
    /// registry; both indicate a broken internal invariant.
    pub fn step(&mut self) -> Result<Turn, TurnError> {
        let Some(id) = self.advance_cursor() else {
            return Err(TurnError::QueueEmpty);
        };
        let Some(pos) = self.positions.get_by_key(&id).copied() else {
            panic!("actor {id:?} is queued but missing from the position index");
        };
        let Some(state) = self.actors.get(&id) else {
            panic!("actor {id:?} is queued but missing from the registry");
        };
        self.turn_count += 1;

        if state.is_player_controlled() {
            return Ok(Turn::Player { actor: id });
        }

        // The brain is detached for the duration of the call so it can
        // mutate the world that owns it, and is only restored if its actor
        // survived the turn.
        if let Some(mut brain) = self.actors.get_mut(&id).and_then(Actor::take_brain) {
            brain.act(id, pos, self);
            if let Some(state) = self.actors.get_mut(&id) {
                state.restore_brain(brain);
            }
        }
        Ok(Turn::Npc { actor: id })
    }

    /// Repeatedly dispatches turns until a player turn surfaces, an error
    /// occurs, or [`NPC_TURN_LIMIT`] consecutive NPC turns have completed.
    ///
    /// The limit is a safety valve against turn-order misconfiguration, such
    /// as a queue with no player actor at all.
    pub fn handle_npc_turns(&mut self) -> Result<Turn, TurnError> {
        for _ in 0..NPC_TURN_LIMIT {
            let turn = self.step()?;
            if matches!(turn, Turn::Player { .. }) {
                return Ok(turn);
            }
        }
        Err(TurnError::SafetyLimit)
    }

    /// Mutable access to an actor's description, for combat-style stat
    /// changes. Placement state is only reachable through the dedicated
    /// primitives.
    pub fn actor_mut(&mut self, actor: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&actor)
    }

    fn is_queued(&self, actor: ActorId) -> bool {
        self.turn_queue.iter().flatten().any(|id| *id == actor)
    }

    fn place_on_map(&mut self, pos: Coord, actor: ActorId) -> bool {
        if !matches!(self.walls.at(pos), Ok(&false)) {
            return false;
        }
        if self.positions.contains_value(&pos) || self.positions.contains_key(&actor) {
            return false;
        }
        self.positions.insert(actor, pos);
        true
    }

    fn advance_cursor(&mut self) -> Option<ActorId> {
        let len = self.turn_queue.len();
        for _ in 0..len {
            self.current_idx += 1;
            if self.current_idx >= len {
                self.current_idx = 0;
            }
            if let Some(id) = self.turn_queue[self.current_idx] {
                return Some(id);
            }
        }
        None
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Actor, ActorId, World};
    use warren_core::{Coord, Grid};

    /// Returns the actor occupying the position, if any.
    #[must_use]
    pub fn actor_at(world: &World, pos: Coord) -> Option<ActorId> {
        world.positions.get_by_value(&pos).copied()
    }

    /// Returns the position of a placed actor, if any.
    #[must_use]
    pub fn position_of(world: &World, actor: ActorId) -> Option<Coord> {
        world.positions.get_by_key(&actor).copied()
    }

    /// Provides read-only access to an actor's description.
    #[must_use]
    pub fn actor(world: &World, actor: ActorId) -> Option<&Actor> {
        world.actors.get(&actor)
    }

    /// Provides read-only access to the wall grid.
    #[must_use]
    pub fn walls(world: &World) -> &Grid<bool> {
        &world.walls
    }

    /// Position of the exit marker.
    #[must_use]
    pub fn exit_position(world: &World) -> Coord {
        world.exit
    }

    /// Number of turns the scheduler has dispatched so far.
    #[must_use]
    pub fn turn_count(world: &World) -> u64 {
        world.turn_count
    }

    /// Number of live (non-tombstoned) entries in the turn queue.
    #[must_use]
    pub fn queue_len(world: &World) -> usize {
        world.turn_queue.iter().flatten().count()
    }

    /// Actor at the turn cursor, if its slot is live.
    #[must_use]
    pub fn current_actor(world: &World) -> Option<ActorId> {
        world.turn_queue.get(world.current_idx).copied().flatten()
    }

    /// Live actors paired with their positions, in turn-queue order.
    #[must_use]
    pub fn live_actors(world: &World) -> Vec<(ActorId, Coord)> {
        world
            .turn_queue
            .iter()
            .flatten()
            .filter_map(|id| position_of(world, *id).map(|pos| (*id, pos)))
            .collect()
    }
}
