use crate::engine::output::Output;
use crate::world;

/// Render arrival at a location: name, description, and the event text
/// (shown on every visit, not just the first).
pub fn render_arrival(out: &mut Output, location: &world::Location) {
    out.title(location.name.clone());

    if !location.description.trim().is_empty() {
        out.say(format!("Descrição: {}", location.description));
    }

    if let Some(event) = &location.event {
        out.event(format!("[EVENTO]: {}", event));
    }
}

pub fn render_inventory(out: &mut Output, inventory: &[String]) {
    if inventory.is_empty() {
        out.say("Seus itens: Nenhum");
    } else {
        out.say(format!("Seus itens: {}", inventory.join(", ")));
    }
}

/// Render the turn's movement options: blocked paths as plain notices
/// (never numbered), then available paths numbered from 1 in declaration
/// order, then the fixed quit entry.
pub fn render_paths(out: &mut Output, available: &[&world::Path], blocked: &[&world::Path]) {
    for path in blocked {
        if let Some(required) = &path.requires {
            out.say(format!(
                " (BLOQUEADO) '{}' para '{}': Você precisa de '{}' para passar!",
                path.label, path.target, required
            ));
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(available.len() + 1);
    for (i, path) in available.iter().enumerate() {
        lines.push(format!(
            "{}. Seguir '{}' para '{}'",
            i + 1,
            path.label,
            path.target
        ));
    }
    lines.push("0. Sair do jogo".to_string());

    out.set_choices(lines);
}
