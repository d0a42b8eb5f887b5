use std::io;
use std::process::ExitCode;

use gravwell::config::{load_config, GameConfig};
use gravwell::error::{validate_config, GameResult};
use gravwell::game::{self, victory_line, Game};
use gravwell::ship::ShipId;
use gravwell::terminal::RawModeGuard;

fn main() -> ExitCode {
    let config = load_config();
    if let Err(e) = validate_config(&config) {
        eprintln!("✗ Refusing to start: {e}");
        return ExitCode::FAILURE;
    }

    match play(config) {
        Ok(Some(winner)) => {
            println!("{}", victory_line(winner));
            ExitCode::SUCCESS
        }
        // Quit: terminate silently.
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

/// Hold raw mode for exactly the duration of the duel.
///
/// The guard drops before the outcome line prints, so the message lands on
/// the restored normal screen.
fn play(config: GameConfig) -> GameResult<Option<ShipId>> {
    let mut out = io::stdout();
    let _guard = RawModeGuard::enter(&mut out)?;
    let mut game = Game::new(config);
    game::run(&mut game, &mut out)
}
