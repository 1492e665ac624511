//! Interactive tutorial - line-driven terminal walkthrough.
//!
//! Reads one command per line, applies it to a [`TourSession`], and prints
//! the re-rendered stage. Playback on the inference stage is paced with the
//! real clock by default, or stepped instantly for scripted input.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use crate::engine::TourSession;

use super::explanations::{get_all_topics, get_panel};
use super::visualizers::{generation_line, insight_panel, render_stage};

const HELP: &str = "\
Ordres:
  n              següent pas
  p              pas anterior
  1..N           anar al pas N
  g              iniciar la inferència (pas d'inferència)
  t <text>       canviar el prompt
  r              reiniciar la inferència
  d              per què al·lucinen / sycophancy
  h              ajuda
  q              sortir";

/// A parsed tutorial command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Next stage.
    Next,
    /// Previous stage.
    Previous,
    /// Jump to a 1-based stage number.
    Select(usize),
    /// Start generation playback.
    Generate,
    /// Replace the prompt.
    Prompt(String),
    /// Reset playback to idle.
    Reset,
    /// Show the deep-dive panels.
    DeepDive,
    /// Show the command list.
    Help,
    /// Leave the tutorial.
    Quit,
}

impl Command {
    /// Parse one input line. Blank or unknown lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "g" | "go" | "generate" => Some(Self::Generate),
            "t" | "prompt" => Some(Self::Prompt(rest.to_string())),
            "r" | "reset" => Some(Self::Reset),
            "d" | "deep" => Some(Self::DeepDive),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => other.parse::<usize>().ok().map(Self::Select),
        }
    }
}

/// Terminal walkthrough over a session.
pub struct InteractiveTutorial {
    session: TourSession,
    /// Sleep between playback ticks instead of stepping instantly.
    realtime: bool,
}

impl InteractiveTutorial {
    /// Create a tutorial that plays back at the session's tick interval.
    pub fn new(session: TourSession) -> Self {
        Self {
            session,
            realtime: true,
        }
    }

    /// Step playback without sleeping.
    pub fn instant(mut self) -> Self {
        self.realtime = false;
        self
    }

    /// Open on a 1-based stage number. Numbers outside the catalog are ignored.
    pub fn open_at(mut self, number: usize) -> Self {
        self.select_number(number);
        self
    }

    /// The session being driven.
    pub fn session(&self) -> &TourSession {
        &self.session
    }

    /// Apply a command, writing any output. Returns `false` on quit.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        tracing::debug!(?command, "command");
        match command {
            Command::Next => {
                self.session.next();
            }
            Command::Previous => {
                self.session.previous();
            }
            Command::Select(number) => {
                self.select_number(number);
            }
            Command::Generate => {
                if self.session.start_playback() {
                    self.play(out)?;
                } else {
                    writeln!(out, "(la inferència només es pot iniciar al pas d'inferència)")?;
                }
            }
            Command::Prompt(text) => self.session.set_prompt(text),
            Command::Reset => self.session.reset_playback(),
            Command::DeepDive => {
                for topic in get_all_topics() {
                    if let Some(panel) = get_panel(topic) {
                        writeln!(out, "{}\n", insight_panel(panel))?;
                    }
                }
                return Ok(true);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        self.render(out)?;
        Ok(true)
    }

    fn select_number(&mut self, number: usize) {
        let moved = number
            .checked_sub(1)
            .is_some_and(|index| self.session.select_stage(index));
        if !moved {
            tracing::debug!(number, "stage unchanged");
        }
    }

    fn play<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while self.session.player().is_playing() {
            let wait = self.session.player().until_next().unwrap_or_default();
            let delta = if self.realtime {
                let started = Instant::now();
                thread::sleep(wait);
                started.elapsed()
            } else {
                wait
            };
            if self.session.advance_time(delta) > 0 {
                let player = self.session.player();
                writeln!(
                    out,
                    "  {}",
                    generation_line(self.session.prompt(), player.revealed(), player.is_playing())
                )?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let view = self.session.view();
        writeln!(out, "\n{}", render_stage(&view, self.session.catalog()))
    }

    /// Run until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Com funciona un LLM?")?;
        writeln!(
            out,
            "Explora el viatge d'una instrucció des del prompt fins a la resposta."
        )?;
        writeln!(out, "(h per a l'ajuda)")?;
        self.render(out)?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Some(command) => {
                    if !self.handle(command, out)? {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => writeln!(out, "Ordre desconeguda: {}. Escriu h.", line.trim())?,
            }
        }
        Ok(())
    }
}
