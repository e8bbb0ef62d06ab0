//! Terminal runner (default binary).
//!
//! Draws the queue, the reserve and the action menu, then applies one action
//! per key press until the player exits.

use std::io::Write;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_reserve::core::GameState;
use tetris_reserve::input::{map_key, MenuCommand};
use tetris_reserve::term::{GameView, StatusKind, StatusLine, TerminalRenderer, Viewport};
use tetris_reserve::{open_or_disable, record_or_disable, ActionJournal, Config};

fn main() -> Result<()> {
    let config = Config::from_env();

    let (journal, journal_msg) = open_or_disable(config.log_path.as_deref());
    let status = StatusLine::new(
        StatusKind::Info,
        journal_msg.unwrap_or_else(|| format!("new game, seed {}", config.seed)),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, journal, status);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    mut journal: Option<ActionJournal<impl Write>>,
    mut status: StatusLine,
) -> Result<()> {
    let mut game_state = GameState::new(config.seed);
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state.snapshot(), Some(&status), Viewport::new(w, h));
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        let action = match map_key(key) {
            Some(MenuCommand::Quit) => return Ok(()),
            Some(MenuCommand::Action(action)) => action,
            None => {
                status = StatusLine::new(StatusKind::Rejected, "invalid option, try again");
                continue;
            }
        };

        let result = game_state.apply_action(action);
        status = match &result {
            Ok(outcome) => StatusLine::new(StatusKind::Success, outcome.to_string()),
            Err(err) => StatusLine::new(StatusKind::Rejected, format!("rejected: {err}")),
        };

        if let Some(msg) = record_or_disable(&mut journal, action, &result, &game_state) {
            status = StatusLine::new(StatusKind::Info, msg);
        }
    }
}
