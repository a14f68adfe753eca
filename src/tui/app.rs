//! Full-screen viewer for a move tree

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::tree::MoveTree;
use crate::tui::{tree_widget::TreeWidget, Theme};

const HELP_TEXT: &str = "q / Esc / Enter: close";

/// Owns the terminal while a tree is on screen. The terminal is restored when
/// the viewer is dropped.
pub struct TreeViewer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TreeViewer {
    pub fn new() -> io::Result<Self> {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> io::Result<Self> {
        enable_raw_mode()?;
        match Self::enter(io::stdout()) {
            Ok(terminal) => Ok(Self { terminal, theme }),
            Err(error) => {
                let _ = restore_terminal(&mut io::stdout());
                Err(error)
            }
        }
    }

    fn enter(mut stdout: Stdout) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Draws `tree` and blocks until the user closes the view. Resizing the
    /// terminal redraws the tree.
    pub fn show(&mut self, tree: &MoveTree) -> io::Result<()> {
        debug!("showing tree with {} nodes", tree.len());
        let theme = &self.theme;

        loop {
            self.terminal.draw(|frame| {
                Self::render_frame(frame, tree, theme);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
                {
                    return Ok(());
                }
            }
        }
    }

    fn render_frame(frame: &mut Frame, tree: &MoveTree, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(TreeWidget::new(tree, theme), chunks[0]);

        let status = format!(
            "{} half-moves, {} levels   {}",
            tree.len().saturating_sub(1),
            tree.depth(),
            HELP_TEXT
        );
        frame.render_widget(Paragraph::new(status).style(theme.text_style()), chunks[1]);
    }
}

impl Drop for TreeViewer {
    fn drop(&mut self) {
        let _ = restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leaves raw mode and the alternate screen. Both steps run even if the first
/// one fails.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    raw.and(screen)
}
