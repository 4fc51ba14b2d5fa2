// src/bin/kanban.rs

use std::env;
use std::error::Error;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use taskboard::kanban::board::{Flow, Kanban};
use taskboard::kanban::client::{HttpTasks, RemoteTasks};
use taskboard::kanban::theme::Theme;
use taskboard::kanban::ui;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let base_url =
        env::var("TASKBOARD_URL").unwrap_or_else(|_| "http://127.0.0.1:3000/v1".to_string());

    let remote = HttpTasks::new(base_url)?;
    let mut kanban = Kanban::connect(remote)?;
    let theme = Theme::default();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut kanban, &theme);
    ratatui::restore();
    result
}

fn run<R: RemoteTasks>(
    terminal: &mut DefaultTerminal,
    kanban: &mut Kanban<R>,
    theme: &Theme,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| ui::draw(frame, kanban, theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            // A failed remote call during a move surfaces here and ends
            // the process after the terminal is restored.
            if let Flow::Quit = kanban.handle_key(key.code)? {
                return Ok(());
            }
        }
    }
}
