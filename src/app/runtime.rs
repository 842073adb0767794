use crate::app::command::KeyBindings;
use crate::app::state::FormApp;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::theme::Theme;
use std::io;
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(120);

/// Event loop binding a [`FormApp`] to a terminal session.
pub struct Runtime {
    app: FormApp,
    terminal: Terminal,
    key_bindings: KeyBindings,
    theme: Theme,
}

impl Runtime {
    pub fn new(app: FormApp, terminal: Terminal) -> Self {
        Self::with_key_bindings(app, terminal, KeyBindings::new())
    }

    pub fn with_key_bindings(app: FormApp, terminal: Terminal, key_bindings: KeyBindings) -> Self {
        Self {
            app,
            terminal,
            key_bindings,
            theme: Theme::default_theme(),
        }
    }

    /// Runs until the user quits and hands the app back for inspection.
    pub fn run(mut self) -> io::Result<FormApp> {
        self.terminal.enter()?;

        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)?;
        Ok(self.app)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.app.should_exit() {
            let now = Instant::now();
            if self.app.tick(now) {
                self.render()?;
            }

            let timeout = self.app.poll_timeout(now, IDLE_POLL);
            let render_requested = match self.terminal.poll_event(timeout)? {
                TerminalEvent::Key(key) => {
                    let command = self.key_bindings.resolve(key);
                    self.app.handle_command(command, Instant::now());
                    true
                }
                TerminalEvent::Resize { .. } => true,
                TerminalEvent::Tick => false,
            };

            if render_requested && !self.app.should_exit() {
                self.render()?;
            }
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.app.frame(&self.theme);
        self.terminal.render_frame(&frame)
    }
}
