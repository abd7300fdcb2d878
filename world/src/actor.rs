//! Actor descriptions, the behavior capability boundary, and the blueprint
//! table.

use std::fmt;

use warren_core::Coord;

use crate::World;

/// Unique handle allocated by the world for an acting entity.
///
/// Actor identity is the handle: two actors with identical stats remain
/// distinct entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u32);

impl ActorId {
    /// Creates a new actor identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Behavior capability invoked by the world once per computer-controlled
/// turn.
///
/// Implementations receive the acting entity, its current position, and
/// mutable access to the world, and may call back into the movement and
/// placement primitives while deciding. The decision algorithm itself is
/// owned entirely by the implementation.
pub trait Brain {
    /// Takes one turn on behalf of `actor`, currently standing at `pos`.
    fn act(&mut self, actor: ActorId, pos: Coord, world: &mut World);

    /// Performs or delegates a named action such as movement or attacking.
    ///
    /// This is the funnel through which external input reaches an actor, and
    /// implementations may also use it internally to decouple decision making
    /// from execution.
    fn perform_action(&mut self, action: &str, actor: ActorId, pos: Coord, world: &mut World);
}

/// Description of an acting entity: identity data plus an optional behavior
/// capability.
pub struct Actor {
    name: String,
    glyph: char,
    health: i32,
    player_controlled: bool,
    brain: Option<Box<dyn Brain>>,
}

impl Actor {
    /// Creates a new actor description without a behavior capability.
    #[must_use]
    pub fn new(name: impl Into<String>, glyph: char, health: i32, player_controlled: bool) -> Self {
        Self {
            name: name.into(),
            glyph,
            health,
            player_controlled,
            brain: None,
        }
    }

    /// Creates an actor from a blueprint entry.
    #[must_use]
    pub fn from_blueprint(blueprint: &ActorBlueprint) -> Self {
        Self::new(
            blueprint.name,
            blueprint.glyph,
            blueprint.health,
            blueprint.player_controlled,
        )
    }

    /// Attaches a behavior capability, consuming and returning the actor.
    #[must_use]
    pub fn with_brain(mut self, brain: Box<dyn Brain>) -> Self {
        self.brain = Some(brain);
        self
    }

    /// Display name of the actor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph used when the actor is rendered.
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Current health of the actor.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Overwrites the actor's health; combat logic owns the policy.
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Reports whether turns for this actor must be resolved by the caller.
    #[must_use]
    pub const fn is_player_controlled(&self) -> bool {
        self.player_controlled
    }

    /// Reports whether a behavior capability is attached.
    #[must_use]
    pub const fn has_brain(&self) -> bool {
        self.brain.is_some()
    }

    pub(crate) fn take_brain(&mut self) -> Option<Box<dyn Brain>> {
        self.brain.take()
    }

    pub(crate) fn restore_brain(&mut self, brain: Box<dyn Brain>) {
        self.brain = Some(brain);
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("glyph", &self.glyph)
            .field("health", &self.health)
            .field("player_controlled", &self.player_controlled)
            .field("brain", &self.brain.is_some())
            .finish()
    }
}

/// Named actor template with the stats applied at spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorBlueprint {
    /// Display name given to spawned actors.
    pub name: &'static str,
    /// Glyph used when the actor is rendered.
    pub glyph: char,
    /// Health assigned at spawn time.
    pub health: i32,
    /// Whether turns must be resolved by the caller.
    pub player_controlled: bool,
}

/// Process-wide constant table of actor templates keyed by template name.
pub const BLUEPRINTS: &[(&str, ActorBlueprint)] = &[
    (
        "player",
        ActorBlueprint {
            name: "You",
            glyph: '@',
            health: 100,
            player_controlled: true,
        },
    ),
    (
        "groblin",
        ActorBlueprint {
            name: "Groblin",
            glyph: 'g',
            health: 20,
            player_controlled: false,
        },
    ),
];

/// Looks up a blueprint by template name.
#[must_use]
pub fn blueprint(name: &str) -> Option<ActorBlueprint> {
    BLUEPRINTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, blueprint)| *blueprint)
}
