use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use super::model::World;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    location: Vec<LocationConfig>, // [[location]] blocks
    #[serde(default)]
    path: Vec<PathConfig>, // [[path]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_location: String,
    victory_item: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    victory_text: String,
}

#[derive(Deserialize)]
struct LocationConfig {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    event: Option<String>,
}

#[derive(Deserialize)]
struct PathConfig {
    from: String,
    to: String,
    label: String,
    #[serde(default)]
    requires: Option<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// The canonical forest world, compiled into the binary so the game runs
/// without any file on disk.
const FLORESTA_TOML: &str = include_str!("../../worlds/floresta.toml");

/// Load the built-in forest world.
pub fn builtin_world() -> io::Result<World> {
    load_world_from_str(FLORESTA_TOML)
}

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> io::Result<World> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text.
pub fn load_world_from_str(contents: &str) -> io::Result<World> {
    let world_file: WorldFile = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    // Basic header validation
    if world_file.world.id.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "world.id may not be empty",
        ));
    }
    if world_file.world.start_location.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "world.start_location may not be empty",
        ));
    }
    if world_file.world.victory_item.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "world.victory_item may not be empty",
        ));
    }

    let victory_text = if world_file.world.victory_text.trim().is_empty() {
        format!(
            "Você encontrou '{}'! Sua aventura termina aqui.",
            world_file.world.victory_item
        )
    } else {
        normalize_multiline_desc(&world_file.world.victory_text)
    };

    let mut world = World::new(
        world_file.world.start_location,
        world_file.world.victory_item,
    );
    world.id = world_file.world.id;
    world.name = world_file.world.name;
    world.desc = normalize_multiline_desc(&world_file.world.desc);
    world.victory_text = victory_text;

    // First definition of a location name wins; later duplicates are
    // no-ops, matching World::add_location.
    for lc in world_file.location {
        if lc.name.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "location.name may not be empty",
            ));
        }
        world.add_location(
            &lc.name,
            &normalize_multiline_desc(&lc.desc),
            lc.item,
            lc.event.map(|e| normalize_multiline_desc(&e)),
        );
    }

    // Paths auto-create endpoints that no [[location]] block declared.
    for pc in world_file.path {
        if pc.from.trim().is_empty() || pc.to.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "path.from and path.to may not be empty",
            ));
        }
        world.add_path(&pc.from, &pc.to, &pc.label, pc.requires);
    }

    debug!(
        "loaded world '{}' with {} locations",
        world.id,
        world.locations.len()
    );

    Ok(world)
}

/// Collapse TOML multiline strings: a wrapped line becomes a space, a
/// blank line becomes a visible newline. Indentation in the TOML never
/// reaches the player.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank = false;
    let mut first_text_seen = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank = true;
            continue;
        }

        if first_text_seen {
            result.push(if pending_blank { '\n' } else { ' ' });
        }
        result.push_str(trimmed);
        first_text_seen = true;
        pending_blank = false;
    }

    result
}
