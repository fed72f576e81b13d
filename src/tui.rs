use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::view::ViewState;

/// Run the interactive view until the user quits. Terminal state is
/// restored on every exit path, including an event-loop error.
pub fn run(state: &mut ViewState, tick_rate: Duration) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("failed to enter alternate screen: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to build terminal: {e}"))?;
    let _ = terminal.hide_cursor();

    let result = event_loop(&mut terminal, state, tick_rate);

    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ViewState,
    tick_rate: Duration,
) -> Result<(), String> {
    let tick_rate = tick_rate.max(Duration::from_millis(10));
    let mut last_tick = Instant::now();
    loop {
        terminal
            .draw(|f| state.render(f))
            .map_err(|e| format!("failed to draw frame: {e}"))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let ready = event::poll(timeout).map_err(|e| format!("failed to poll events: {e}"))?;
        if ready {
            match event::read().map_err(|e| format!("failed to read event: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    state.handle_key(key.code);
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    state.handle_click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state.on_tick();
            last_tick = Instant::now();
        }

        if state.should_quit() {
            return Ok(());
        }
    }
}
