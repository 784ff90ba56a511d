use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Sanity-check a loaded world. Path targets need no check here: adding a
/// path auto-creates its endpoints, so every target is a real location.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.locations.is_empty() {
        errors.push(ValidationError::new("world has no locations"));
    }

    if !world.locations.contains_key(&world.start_location) {
        errors.push(ValidationError::new(format!(
            "start_location '{}' not found among locations",
            world.start_location
        )));
    }

    // The victory item must lie somewhere, and that somewhere must be
    // reachable from the start (gates ignored; they only delay a route).
    let victory_holders: Vec<&str> = world
        .locations
        .values()
        .filter(|l| l.item.as_deref() == Some(world.victory_item.as_str()))
        .map(|l| l.name.as_str())
        .collect();

    if victory_holders.is_empty() {
        errors.push(ValidationError::new(format!(
            "victory_item '{}' is not present in any location",
            world.victory_item
        )));
    } else if !victory_holders
        .iter()
        .any(|name| world.find_route(&world.start_location, name).is_some())
    {
        errors.push(ValidationError::new(format!(
            "victory_item '{}' is unreachable from start_location '{}'",
            world.victory_item, world.start_location
        )));
    }

    errors
}
