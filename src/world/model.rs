use std::collections::{HashMap, HashSet, VecDeque};

//////////////////////////////
/// GAME STRUCTS           ///
//////////////////////////////

/// Runtime world type used by the game loop: a directed graph of named
/// locations plus the metadata that drives the session (start point,
/// victory item, victory text).
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_location: String,
    pub victory_item: String,
    pub victory_text: String,
    pub locations: HashMap<String, Location>,
}

#[derive(Debug)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// Item lying here, if any. Cleared permanently once collected.
    pub item: Option<String>,
    /// Flavor text shown on every visit. Never consumed.
    pub event: Option<String>,
    /// Outgoing paths, in declaration order.
    pub paths: Vec<Path>,
}

/// A one-way labeled connection, optionally gated by an inventory item.
#[derive(Debug)]
pub struct Path {
    pub target: String,
    pub label: String,
    pub requires: Option<String>,
}

impl World {
    pub fn new(start_location: impl Into<String>, victory_item: impl Into<String>) -> Self {
        World {
            id: String::new(),
            name: String::new(),
            desc: String::new(),
            start_location: start_location.into(),
            victory_item: victory_item.into(),
            victory_text: String::new(),
            locations: HashMap::new(),
        }
    }

    /// Insert a location. The first definition of a name wins: re-adding
    /// it is a no-op and the existing fields are kept.
    pub fn add_location(
        &mut self,
        name: &str,
        description: &str,
        item: Option<String>,
        event: Option<String>,
    ) {
        if self.locations.contains_key(name) {
            return;
        }
        self.locations.insert(
            name.to_string(),
            Location {
                name: name.to_string(),
                description: description.to_string(),
                item,
                event,
                paths: Vec::new(),
            },
        );
    }

    /// Append a path from `source` to `target`. Missing endpoints are
    /// auto-created as bare locations with empty descriptions. Parallel
    /// paths are kept distinct; nothing is de-duplicated.
    pub fn add_path(&mut self, source: &str, target: &str, label: &str, requires: Option<String>) {
        self.add_location(source, "", None, None);
        self.add_location(target, "", None, None);

        if let Some(location) = self.locations.get_mut(source) {
            location.paths.push(Path {
                target: target.to_string(),
                label: label.to_string(),
                requires,
            });
        }
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn location_mut(&mut self, name: &str) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    /// Breadth-first route from `from` to `to`, ignoring item gates
    /// (a gate restricts when a path may be used, not whether it exists).
    /// Returns the full location sequence including both endpoints, or
    /// `None` when `from` is unknown or no route exists.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Vec<String>> {
        if !self.locations.contains_key(from) {
            return None;
        }
        if from == to {
            return Some(vec![from.to_string()]);
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut parents: HashMap<&str, &str> = HashMap::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            let Some(location) = self.locations.get(current) else {
                continue;
            };
            for path in &location.paths {
                let next = path.target.as_str();
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, current);

                if next == to {
                    // Walk the parent chain back to the start.
                    let mut route = vec![next.to_string()];
                    let mut step = next;
                    while let Some(&prev) = parents.get(step) {
                        route.push(prev.to_string());
                        step = prev;
                    }
                    route.reverse();
                    return Some(route);
                }
                queue.push_back(next);
            }
        }

        None
    }
}
