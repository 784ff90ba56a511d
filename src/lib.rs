pub mod engine;
pub mod world;

use log::{debug, info};

use engine::{
    Choice, Output, partition_paths, render_arrival, render_inventory, render_paths,
    resolve_choice,
};
use world::World;

pub use world::{builtin_world, load_world_from_file, load_world_from_str, validate_world};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Exploring,
    /// Terminal: the victory item was collected.
    Won,
    /// Terminal: the player chose to leave.
    Quit,
}

/// One playthrough: the world plus the player's position, inventory, and
/// machine state. Call `begin` once for the opening turn, then `step`
/// with each line of input until the state is terminal.
pub struct GameSession {
    world: World,
    current_location: String,
    inventory: Vec<String>,
    state: SessionState,
}

impl GameSession {
    pub fn new(world: World) -> Self {
        let current_location = world.start_location.clone();
        GameSession {
            world,
            current_location,
            inventory: Vec::new(),
            state: SessionState::Exploring,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Render the opening turn (which may already collect an item or win,
    /// if the start location holds one).
    pub fn begin(&mut self) -> Output {
        let mut out = Output::new();
        self.render_turn(&mut out);
        out
    }

    /// Process one line of player input and render the resulting turn.
    /// A no-op once the session has reached a terminal state.
    pub fn step(&mut self, input: &str) -> Output {
        let mut out = Output::new();
        if self.state != SessionState::Exploring {
            return out;
        }

        let target = match self.world.location(&self.current_location) {
            Some(location) => {
                let (available, _) = partition_paths(location, &self.inventory);
                match resolve_choice(input, available.len()) {
                    Choice::Quit => {
                        self.state = SessionState::Quit;
                        out.say("Saindo do jogo. Até a próxima!");
                        return out;
                    }
                    Choice::Move(i) => Some(available[i].target.clone()),
                    Choice::Invalid => {
                        out.say("Opção inválida. Por favor, escolha um número válido.");
                        None
                    }
                }
            }
            None => {
                out.say(format!(
                    "Erro: você está em um local desconhecido '{}'.",
                    self.current_location
                ));
                self.state = SessionState::Quit;
                return out;
            }
        };

        if let Some(target) = target {
            debug!("moving from '{}' to '{}'", self.current_location, target);
            self.current_location = target;
        }

        // An invalid choice re-renders the same turn from the top; the
        // pickup already happened, so nothing is collected twice.
        self.render_turn(&mut out);
        out
    }

    fn render_turn(&mut self, out: &mut Output) {
        match self.world.location(&self.current_location) {
            Some(location) => render_arrival(out, location),
            None => {
                out.say(format!(
                    "Erro: você está em um local desconhecido '{}'.",
                    self.current_location
                ));
                self.state = SessionState::Quit;
                return;
            }
        }

        // Pickup: clear the item from the location the moment it enters
        // the inventory, so it can never be collected again.
        let pending = self
            .world
            .location(&self.current_location)
            .and_then(|l| l.item.clone());
        if let Some(item) = pending {
            if !self.inventory.iter().any(|held| held == &item) {
                if let Some(location) = self.world.location_mut(&self.current_location) {
                    location.item = None;
                }
                out.event(format!(
                    "*** Você encontrou: {item}! Ele foi adicionado ao seu inventário. ***"
                ));
                self.inventory.push(item);
            }
        }

        // Win check runs before any choice is offered this turn.
        if self
            .inventory
            .iter()
            .any(|held| held == &self.world.victory_item)
        {
            info!("victory item collected at '{}'", self.current_location);
            self.state = SessionState::Won;
            out.event(self.world.victory_text.clone());
            return;
        }

        render_inventory(out, &self.inventory);

        if let Some(location) = self.world.location(&self.current_location) {
            let (available, blocked) = partition_paths(location, &self.inventory);
            render_paths(out, &available, &blocked);
        }
    }
}
