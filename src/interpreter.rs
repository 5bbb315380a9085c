use crate::command::{CommandFactory, ExitCode};
use crate::menu;
use crate::registry::LogisticsRegistry;
use crate::session::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::{BufRead, Lines, Write};
use tracing::{debug, info};

const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// One read from a [`LineSource`].
enum Input {
    Line(String),
    /// The user pressed Ctrl-C.
    Interrupted,
    End,
}

/// Source of input lines for the read loop.
trait LineSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Input>;
}

struct EditorInput(DefaultEditor);

impl LineSource for EditorInput {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Input> {
        match self.0.readline(prompt) {
            Ok(line) => {
                self.0.add_history_entry(line.as_str())?;
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::End),
            Err(err) => Err(err.into()),
        }
    }
}

/// Script lines with blanks and `#` comments dropped.
struct ScriptInput<R>(Lines<R>);

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn next_line(&mut self, _prompt: &str) -> anyhow::Result<Input> {
        for line in self.0.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                return Ok(Input::Line(line));
            }
        }
        Ok(Input::End)
    }
}

/// The logistics shell: a [`Session`] plus the commands that act on it.
///
/// Input is either a menu number followed by the entry's fields, or a typed
/// command such as `add-vehicle V1 Chicago`. Menu input is consumed one
/// whitespace-delimited word at a time, so `1 V1 Chicago` on one line and the
/// same words on three lines are equivalent.
///
/// Example
/// ```
/// use cat_logistics::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out: Vec<u8> = Vec::new();
/// let code = sh.run_with_output("add-shipment", &["S1"], &mut out).unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(sh.registry().shipments().len(), 1);
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
    /// Words read but not yet consumed by the menu.
    pending: VecDeque<String>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            session: Session::new(),
            commands,
            pending: VecDeque::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &LogisticsRegistry {
        &self.session.registry
    }

    pub fn should_exit(&self) -> bool {
        self.session.should_exit
    }

    /// Run a single command invocation by name with arguments, printing to stdout.
    pub fn run(&mut self, name: &str, args: &[&str]) -> anyhow::Result<ExitCode> {
        self.run_with_output(name, args, &mut std::io::stdout())
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Returns the command's exit code or an error if no command has that name.
    pub fn run_with_output(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                let code = cmd.execute(stdout, &mut self.session)?;
                debug!(command = name, code, "command finished");
                return Ok(code);
            }
        }
        Err(anyhow::anyhow!("command not found: {}", name))
    }

    /// Split a typed command line on whitespace and run it.
    ///
    /// An empty line is a successful no-op.
    pub fn execute_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.split_first() {
            Some((name, args)) => self.run_with_output(name, args, stdout),
            None => Ok(0),
        }
    }

    /// Run commands read from `input` until it ends or `exit` is run.
    ///
    /// Menu numbers take their fields from the words that follow them.
    pub fn run_script<R: BufRead>(
        &mut self,
        input: R,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<()> {
        info!("running script");
        self.drive(&mut ScriptInput(input.lines()), stdout, false)
    }

    /// Interactive Read-Eval-Print Loop backed by `rustyline`.
    pub fn repl(&mut self, show_menu: bool) -> anyhow::Result<()> {
        // Based on the basic example in: https://github.com/kkawakam/rustyline
        let editor = DefaultEditor::new()?;
        info!("starting interactive session");
        self.drive(&mut EditorInput(editor), &mut std::io::stdout(), show_menu)
    }

    fn drive(
        &mut self,
        input: &mut dyn LineSource,
        stdout: &mut dyn Write,
        show_menu: bool,
    ) -> anyhow::Result<()> {
        while !self.session.should_exit {
            if show_menu && self.pending.is_empty() {
                menu::render(stdout)?;
                stdout.flush()?;
            }
            if !self.fill_pending(input, CHOICE_PROMPT, stdout)? {
                break;
            }
            let starts_with_choice = self.pending.front().is_some_and(|w| menu::is_choice(w));
            let result = if starts_with_choice {
                let choice = self.pending.pop_front().unwrap_or_default();
                self.run_choice(&choice, input, stdout)
            } else {
                let line = Vec::from(std::mem::take(&mut self.pending)).join(" ");
                self.execute_line(&line, stdout).map(Some)
            };
            match result {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => writeln!(stdout, "{e}")?,
            }
        }
        info!("session finished");
        Ok(())
    }

    /// Read lines until at least one word is pending.
    ///
    /// Returns `false` once input has ended or was interrupted.
    fn fill_pending(
        &mut self,
        input: &mut dyn LineSource,
        prompt: &str,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<bool> {
        while self.pending.is_empty() {
            match input.next_line(prompt)? {
                Input::Line(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Input::Interrupted => {
                    writeln!(stdout, "Interrupted")?;
                    return Ok(false);
                }
                Input::End => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Take the fields of a menu entry from pending words, prompting as needed,
    /// and run its command.
    ///
    /// `Ok(None)` means the input ended before every field was read.
    fn run_choice(
        &mut self,
        choice: &str,
        input: &mut dyn LineSource,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<Option<ExitCode>> {
        let Some(entry) = menu::lookup(choice) else {
            writeln!(stdout, "Invalid choice! Please try again.")?;
            return Ok(Some(1));
        };

        let mut fields = Vec::with_capacity(entry.prompts.len());
        for prompt in entry.prompts {
            if !self.fill_pending(input, prompt, stdout)? {
                return Ok(None);
            }
            fields.extend(self.pending.pop_front());
        }
        let args: Vec<&str> = fields.iter().map(String::as_str).collect();
        self.run_with_output(entry.command, &args, stdout).map(Some)
    }
}

impl Default for Interpreter {
    /// Create an interpreter with every logistics command plus `menu` and `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<AddVehicle>::default()),
            Box::new(Factory::<AddShipment>::default()),
            Box::new(Factory::<AddRoute>::default()),
            Box::new(Factory::<UpdateStatus>::default()),
            Box::new(Factory::<TrackShipments>::default()),
            Box::new(Factory::<TrackVehicles>::default()),
            Box::new(Factory::<Routes>::default()),
            Box::new(Factory::<UpdateLocation>::default()),
            Box::new(Factory::<Menu>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}
