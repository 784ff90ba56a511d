use crate::world;

/// What a line of player input means for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    /// Index into the *available* path list offered this turn.
    Move(usize),
    Invalid,
}

/// Split a location's outgoing paths by the player's inventory: a path is
/// available when it has no gate or the gating item is held, blocked
/// otherwise. Declaration order is preserved on both sides.
pub fn partition_paths<'a>(
    location: &'a world::Location,
    inventory: &[String],
) -> (Vec<&'a world::Path>, Vec<&'a world::Path>) {
    let mut available: Vec<&world::Path> = Vec::new();
    let mut blocked: Vec<&world::Path> = Vec::new();

    for path in &location.paths {
        match &path.requires {
            Some(item) if !inventory.iter().any(|held| held == item) => blocked.push(path),
            _ => available.push(path),
        }
    }

    (available, blocked)
}

/// Resolve one line of input against the options offered this turn.
/// Only an exact match of a printed number counts ("01" or "1 extra"
/// are invalid); malformed text never aborts the session.
pub fn resolve_choice(input: &str, option_count: usize) -> Choice {
    let input = input.trim();

    if input == "0" {
        return Choice::Quit;
    }

    for n in 1..=option_count {
        if input == n.to_string() {
            return Choice::Move(n - 1);
        }
    }

    Choice::Invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    fn gated_location() -> World {
        let mut world = World::new("a", "gem");
        world.add_path("a", "b", "open trail", None);
        world.add_path("a", "c", "locked gate", Some("key".to_string()));
        world.add_path("a", "d", "back", None);
        world
    }

    #[test]
    fn gated_paths_are_blocked_without_the_item() {
        let world = gated_location();
        let a = world.location("a").unwrap();

        let (available, blocked) = partition_paths(a, &[]);
        assert_eq!(available.len(), 2);
        assert_eq!(available[0].label, "open trail");
        assert_eq!(available[1].label, "back");
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].label, "locked gate");
    }

    #[test]
    fn gated_paths_open_once_the_item_is_held() {
        let world = gated_location();
        let a = world.location("a").unwrap();

        let (available, blocked) = partition_paths(a, &["key".to_string()]);
        assert_eq!(available.len(), 3);
        assert!(blocked.is_empty());
        // declaration order is preserved
        assert_eq!(available[1].label, "locked gate");
    }

    #[test]
    fn zero_always_quits() {
        assert_eq!(resolve_choice("0", 0), Choice::Quit);
        assert_eq!(resolve_choice(" 0 ", 5), Choice::Quit);
    }

    #[test]
    fn exact_option_numbers_move() {
        assert_eq!(resolve_choice("1", 3), Choice::Move(0));
        assert_eq!(resolve_choice("3", 3), Choice::Move(2));
        assert_eq!(resolve_choice(" 2\n", 3), Choice::Move(1));
    }

    #[test]
    fn everything_else_is_invalid() {
        assert_eq!(resolve_choice("4", 3), Choice::Invalid);
        assert_eq!(resolve_choice("99", 3), Choice::Invalid);
        assert_eq!(resolve_choice("abc", 3), Choice::Invalid);
        assert_eq!(resolve_choice("", 3), Choice::Invalid);
        assert_eq!(resolve_choice("-1", 3), Choice::Invalid);
        assert_eq!(resolve_choice("01", 3), Choice::Invalid);
        assert_eq!(resolve_choice("1", 0), Choice::Invalid);
    }
}
