use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use trilha::engine::{Output, OutputBlock};
use trilha::{GameSession, SessionState, builtin_world, load_world_from_file, validate_world};

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(name) => {
                println!("\n{}", "=".repeat(40));
                println!("Local: {}", name);
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
            }
            OutputBlock::Event(ev) => {
                println!("\n{}", ev);
            }
            OutputBlock::Choices(lines) => {
                println!("\nPara onde você quer ir?");
                for line in lines {
                    println!("{}", line);
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_world_from_file(&path) {
            Ok(w) => {
                println!("Usando o mundo: {}", path.display());
                w
            }
            Err(e) => {
                eprintln!("Falha ao carregar o mundo '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => match builtin_world() {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Falha ao carregar o mundo embutido: {e}");
                std::process::exit(1);
            }
        },
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("Mundo inválido: {}", err.message);
        }
        std::process::exit(1);
    }

    println!("Bem-vindo ao {}!", world.name);
    if !world.desc.trim().is_empty() {
        println!("{}", world.desc.trim());
    }

    let mut session = GameSession::new(world);
    flush_output(session.begin());

    let stdin = io::stdin();

    while session.state() == SessionState::Exploring {
        print!("Escolha uma opção: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nSaindo do jogo. Até a próxima!");
            break;
        }

        flush_output(session.step(&input));
    }

    Ok(())
}
