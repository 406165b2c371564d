#![forbid(unsafe_code)]

//! The program loop: model in, frames out.
//!
//! A [`Model`] owns all application state. The loop feeds it messages
//! (converted from terminal events), executes the [`Cmd`] it returns, and
//! asks it to render a [`Frame`] once per iteration. Command execution is
//! separated from the terminal loop so its semantics are testable against
//! an in-memory writer.

use std::io::{self, Write};
use std::time::Duration;

use folio_core::event::{ClipboardEvent, Event};
use folio_core::session::{SessionOptions, TerminalSession};
use folio_render::{Frame, Presenter};
use tracing::warn;

use crate::clipboard::copy_osc52;

/// How long the loop waits for input before synthesizing a tick.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(33);

/// An effect for the loop to execute after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd<M> {
    /// Nothing to do.
    None,
    /// Exit the program.
    Quit,
    /// Feed another message through `update` immediately.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Write text to the system clipboard; completion comes back to the
    /// model as [`Event::Clipboard`].
    CopyToClipboard(String),
}

/// Application state plus its update and view logic.
pub trait Model {
    /// The message type `update` consumes. Terminal events enter through
    /// the `From<Event>` conversion.
    type Message: From<Event>;

    /// Command to run before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Consume one message, returning a follow-up command.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state into a frame.
    fn view(&self, frame: &mut Frame);
}

/// Loop configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Input poll timeout; on expiry the model receives [`Event::Tick`].
    pub tick_rate: Duration,
    /// Terminal modes to enable for the session.
    pub session: SessionOptions,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            session: SessionOptions::default(),
        }
    }
}

/// Runs a [`Model`] against the terminal until it returns [`Cmd::Quit`].
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            config: ProgramConfig::default(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: ProgramConfig) -> Self {
        self.config = config;
        self
    }

    /// Take over the terminal and run until quit. The session guard
    /// restores the terminal on every exit path, panics included.
    pub fn run(mut self) -> io::Result<()> {
        let mut session = TerminalSession::new(self.config.session)?;
        let result = self.event_loop();
        let restored = session.restore();
        result.and(restored)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        let mut size = TerminalSession::size()?;
        let mut presenter = Presenter::new(io::stdout());

        let init = self.model.init();
        if execute(&mut self.model, init, presenter.writer_mut()) {
            return Ok(());
        }

        loop {
            let mut frame = Frame::new(size.0, size.1);
            self.model.view(&mut frame);
            presenter.present(&frame.buffer)?;

            let event = if crossterm::event::poll(self.config.tick_rate)? {
                match Event::from_crossterm(crossterm::event::read()?) {
                    Some(event) => event,
                    None => continue,
                }
            } else {
                Event::Tick
            };

            if let Event::Resize { width, height } = event {
                size = (width, height);
                presenter.invalidate();
            }

            let cmd = self.model.update(M::Message::from(event));
            if execute(&mut self.model, cmd, presenter.writer_mut()) {
                return Ok(());
            }
        }
    }
}

/// Execute a command tree against `model`, returning whether to quit.
///
/// Clipboard writes go to `clipboard` (the presenter's writer in
/// production); their outcome is fed back to the model as an event rather
/// than surfaced as an error, since a refused clipboard write is ordinary
/// program input, not a loop failure.
pub fn execute<M: Model, W: Write>(
    model: &mut M,
    cmd: Cmd<M::Message>,
    clipboard: &mut W,
) -> bool {
    match cmd {
        Cmd::None => false,
        Cmd::Quit => true,
        Cmd::Msg(msg) => {
            let next = model.update(msg);
            execute(model, next, clipboard)
        }
        Cmd::Batch(cmds) => {
            let mut quit = false;
            for cmd in cmds {
                quit |= execute(model, cmd, clipboard);
            }
            quit
        }
        Cmd::CopyToClipboard(text) => {
            let copied = match copy_osc52(clipboard, &text) {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "clipboard write failed");
                    false
                }
            };
            let event = Event::Clipboard(ClipboardEvent { copied });
            let next = model.update(M::Message::from(event));
            execute(model, next, clipboard)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Input(Event),
        Bump,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            Msg::Input(event)
        }
    }

    #[derive(Default)]
    struct Counter {
        bumps: u32,
        copied: Option<bool>,
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Bump => {
                    self.bumps += 1;
                    Cmd::None
                }
                Msg::Input(Event::Clipboard(ev)) => {
                    self.copied = Some(ev.copied);
                    Cmd::None
                }
                Msg::Input(_) => Cmd::None,
            }
        }

        fn view(&self, _frame: &mut Frame) {}
    }

    #[test]
    fn msg_feeds_back_through_update() {
        let mut model = Counter::default();
        let mut sink = Vec::new();
        let quit = execute(&mut model, Cmd::Msg(Msg::Bump), &mut sink);
        assert!(!quit);
        assert_eq!(model.bumps, 1);
    }

    #[test]
    fn batch_runs_all_and_reports_quit() {
        let mut model = Counter::default();
        let mut sink = Vec::new();
        let quit = execute(
            &mut model,
            Cmd::Batch(vec![Cmd::Msg(Msg::Bump), Cmd::Quit, Cmd::Msg(Msg::Bump)]),
            &mut sink,
        );
        assert!(quit);
        assert_eq!(model.bumps, 2);
    }

    #[test]
    fn clipboard_cmd_writes_and_notifies() {
        let mut model = Counter::default();
        let mut sink = Vec::new();
        execute(
            &mut model,
            Cmd::CopyToClipboard("hello".into()),
            &mut sink,
        );
        assert_eq!(model.copied, Some(true));
        assert!(String::from_utf8(sink).unwrap().starts_with("\x1b]52;c;"));
    }

    #[test]
    fn none_does_nothing() {
        let mut model = Counter::default();
        let mut sink = Vec::new();
        assert!(!execute(&mut model, Cmd::None, &mut sink));
        assert_eq!(model.bumps, 0);
        assert!(sink.is_empty());
    }
}
