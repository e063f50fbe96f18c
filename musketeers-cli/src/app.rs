use std::path::{Path, PathBuf};

use anyhow::Context;
use musketeer_types::Side;
use musketeers::{choose_side, Game, GameMode, History, Prompt, ReplayController};

use crate::Cli;

/// Settings that survive between games plus the play-again loop.
pub struct App {
    mode: Option<GameMode>,
    side: Option<Side>,
    seed: Option<u64>,
    save_history: Option<PathBuf>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self {
            mode: cli.mode.map(Into::into),
            side: cli.side.map(Into::into),
            seed: cli.seed,
            save_history: cli.save_history.clone(),
        }
    }

    pub fn run(self, prompt: &mut dyn Prompt) -> anyhow::Result<()> {
        loop {
            self.play(prompt)?;
            write!(
                prompt.out(),
                "\n\n\nWould you like to play again? Enter 'Y' or 'N': "
            )?;
            let again = prompt.choose("YN", "Invalid option. Enter either 'Y' or 'N': ")?;
            if again == 'N' {
                writeln!(prompt.out(), "Thanks for playing!")?;
                break;
            }
            writeln!(prompt.out(), "Restarting...\n\n")?;
        }
        Ok(())
    }

    fn play(&self, prompt: &mut dyn Prompt) -> anyhow::Result<()> {
        writeln!(prompt.out(), "Welcome! \n")?;
        let mode = match self.mode {
            Some(mode) => mode,
            None => GameMode::choose(prompt)?,
        };
        writeln!(prompt.out(), "Playing {mode}")?;
        let human = match (mode.has_computer(), self.side) {
            (false, _) => Side::Musketeer,
            (true, Some(side)) => side,
            (true, None) => choose_side(prompt)?,
        };
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("starting {mode} with seed {seed}");

        let mut game = Game::with_mode(mode, human, seed, prompt);
        game.run()?;
        if let Some(path) = &self.save_history {
            game.history()
                .save(path)
                .with_context(|| format!("saving history to {}", path.display()))?;
        }
        game.end_game()?;
        Ok(())
    }
}

/// Loads a saved game and steps through it from its final position.
pub fn replay_saved(path: &Path, prompt: &mut dyn Prompt) -> anyhow::Result<()> {
    let history = History::load(path)
        .with_context(|| format!("reading history from {}", path.display()))?;
    let mut board = history
        .board_with_history()
        .with_context(|| format!("replaying {}", path.display()))?;
    ReplayController::new(history.moves, &mut board, &mut *prompt).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use musketeers::{Console, ScriptedInput};

    use super::*;

    // Walks E1 and A5 onto row 3 next to C3, handing the guards the win
    const GUARDS_WIN: &str = "m e1 e2 m d1 e1 m e2 e3 m d2 e2 m a5 a4 m b5 a5 m a4 a3";

    fn console(script: &str) -> Console<ScriptedInput, Vec<u8>> {
        Console::new(ScriptedInput::new(script), Vec::new())
    }

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("musketeers-cli-{name}-{}.ron", std::process::id()))
    }

    fn human_app(save_history: Option<PathBuf>) -> App {
        App {
            mode: Some(GameMode::Human),
            side: None,
            seed: Some(0),
            save_history,
        }
    }

    #[test]
    fn plays_again_until_declined() {
        // First game: no replay, play again. Second game: replay and quit, stop.
        let script = format!("{GUARDS_WIN} n y {GUARDS_WIN} y q n");
        let mut console = console(&script);
        human_app(None).run(&mut console).unwrap();
        assert_eq!(console.input().remaining(), 0);
        let transcript = console.transcript();
        assert_eq!(transcript.matches("Welcome!").count(), 2);
        assert_eq!(transcript.matches("GUARD won!").count(), 2);
        assert_eq!(transcript.matches("Restarting...").count(), 1);
        assert_eq!(transcript.matches("ACTION REPLAY Mode").count(), 1);
        assert!(transcript.contains("Currently on Move 7 (End)"));
        assert!(transcript.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn closed_input_stops_the_loop() {
        let mut console = console("m e1 e2");
        assert!(human_app(None).run(&mut console).is_err());
        assert!(!console.transcript().contains("Thanks for playing!"));
    }

    #[test]
    fn saved_history_replays_from_the_end() {
        let path = scratch_file("saved");
        let mut session = console(&format!("{GUARDS_WIN} n n"));
        human_app(Some(path.clone())).run(&mut session).unwrap();

        let history = History::load(&path).unwrap();
        assert_eq!(history.len(), 7);
        let board = history.board_with_history().unwrap();
        assert_eq!(board.winner(), Some(Side::Guard));

        let mut replay = console("u u r q");
        replay_saved(&path, &mut replay).unwrap();
        let transcript = replay.transcript();
        assert!(transcript.contains("Currently on Move 7 (End)"));
        assert!(transcript.contains("Undo -> Move 5"));
        assert!(transcript.contains("Redo -> Move 6"));
        assert_eq!(transcript.matches("Exiting Action Replay Mode.").count(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_history_file_is_reported() {
        let path = scratch_file("missing");
        let err = replay_saved(&path, &mut console("q")).unwrap_err();
        assert!(err.to_string().starts_with("reading history from"));
    }
}
