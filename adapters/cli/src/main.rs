#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Warren turn loop in a terminal.
//!
//! The adapter owns everything the simulation core leaves to its callers:
//! parsing the map legend, resolving player turns from key commands, and
//! rendering the world between turns.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use warren_core::{Coord, Grid, GridError};
use warren_system_ai::{
    perform_move, WanderBrain, ACTION_MOVE_DOWN, ACTION_MOVE_LEFT, ACTION_MOVE_RIGHT,
    ACTION_MOVE_UP,
};
use warren_world::{blueprint, query, Actor, ActorId, Turn, TurnError, World};

const DEFAULT_DUNGEON: &str = "
    #############
    #....#.#....#
    #....#......#
    #....#.#....#
    ##.###.##.###
    #......#....#
    ##.##.##....#
    #...........#
    #############
";
const DEFAULT_EXIT: Coord = Coord::new(10, 6);

/// Flags accepted by the `warren` binary.
#[derive(Debug, Parser)]
#[command(name = "warren", about = "A small turn-based dungeon crawl")]
struct Args {
    /// Map file using '#' for walls and '.' for floor; defaults to the
    /// built-in dungeon.
    #[arg(long)]
    map: Option<PathBuf>,
    /// Seed shared by the wandering groblins.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Number of groblins scattered across the floor.
    #[arg(long, default_value_t = 3)]
    groblins: u32,
}

fn dungeon_legend(glyph: char) -> Option<bool> {
    match glyph {
        '.' => Some(false),
        '#' => Some(true),
        _ => None,
    }
}

/// Enumerates the floor cells of a wall grid in row-major order.
fn floor_cells(walls: &Grid<bool>) -> Result<Vec<Coord>, GridError> {
    let region = walls.region();
    let mut floors = Vec::new();
    let mut cursor = Some(region.top_left());
    while let Some(c) = cursor {
        if !*walls.at(c)? {
            floors.push(c);
        }
        cursor = region.next(c)?;
    }
    Ok(floors)
}

fn render(world: &World) -> Result<String, GridError> {
    let exit = query::exit_position(world);
    query::walls(world).stringify(|wall, c| {
        if let Some(actor) = query::actor_at(world, c) {
            if let Some(actor) = query::actor(world, actor) {
                return actor.glyph().to_string();
            }
        }
        if c == exit {
            ">".to_string()
        } else if *wall {
            "#".to_string()
        } else {
            ".".to_string()
        }
    })
}

fn build_world(args: &Args) -> Result<(World, ActorId)> {
    let (walls, exit) = match &args.map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading map file {}", path.display()))?;
            let walls = Grid::parse(&text, dungeon_legend).context("parsing map legend")?;
            let exit = *floor_cells(&walls)
                .context("scanning map for floor")?
                .last()
                .context("map has no floor cells")?;
            (walls, exit)
        }
        None => {
            let walls =
                Grid::parse(DEFAULT_DUNGEON, dungeon_legend).context("parsing built-in dungeon")?;
            (walls, DEFAULT_EXIT)
        }
    };

    let floors = floor_cells(&walls).context("scanning map for floor")?;
    let mut world = World::new(walls, exit);

    let player_template = blueprint("player").context("player blueprint missing")?;
    let player = world.register(Actor::from_blueprint(&player_template));
    let start = floors.first().copied().context("map has no floor cells")?;
    if !world.put_actor(start, player) {
        bail!("could not place the player at {start:?}");
    }

    let groblin_template = blueprint("groblin").context("groblin blueprint missing")?;
    let mut spawned = 0;
    for cell in floors.iter().rev() {
        if spawned == args.groblins {
            break;
        }
        if *cell == exit {
            continue;
        }
        let groblin = world.register(
            Actor::from_blueprint(&groblin_template)
                .with_brain(Box::new(WanderBrain::new(args.seed.wrapping_add(u64::from(spawned))))),
        );
        if world.put_actor(*cell, groblin) {
            spawned += 1;
        }
    }

    Ok((world, player))
}

/// Reads one trimmed line of input; `None` marks end of input.
fn read_command() -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("reading player input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Resolves one player turn from a key command; returns `false` when the
/// player asked to quit or input ended.
fn resolve_player_turn(world: &mut World, player: ActorId) -> Result<bool> {
    let action = loop {
        let Some(command) = read_command()? else {
            return Ok(false);
        };
        match command.as_str() {
            "w" => break ACTION_MOVE_UP,
            "s" => break ACTION_MOVE_DOWN,
            "a" => break ACTION_MOVE_LEFT,
            "d" => break ACTION_MOVE_RIGHT,
            "q" => return Ok(false),
            _ => println!("keys: w/a/s/d to move, q to quit"),
        }
    };
    let pos = query::position_of(world, player).context("player has no position")?;
    // Bumping into a wall still spends the turn.
    let _ = perform_move(action, player, pos, world);
    Ok(true)
}

/// Entry point for the Warren command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let (mut world, player) = build_world(&args)?;

    println!("Escape the warren. Reach the > to win.");
    loop {
        println!("{}", render(&world).context("rendering world")?);
        if query::position_of(&world, player) == Some(query::exit_position(&world)) {
            println!("You escape after {} turns. You win!", query::turn_count(&world));
            return Ok(());
        }
        match world.handle_npc_turns() {
            Ok(Turn::Player { actor }) => {
                if !resolve_player_turn(&mut world, actor)? {
                    return Ok(());
                }
            }
            Ok(Turn::Npc { .. }) => {}
            Err(TurnError::QueueEmpty) => bail!("no actors left in the turn queue"),
            Err(TurnError::SafetyLimit) => {
                bail!("npc turns never yielded to the player; is a player actor queued?")
            }
        }
    }
}
