use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use mate_core::{update, AppState, Msg, OutputFormat, Phase};
use mate_logging::{mate_debug, mate_info, mate_warn};

use super::cli::Cli;
use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_line, Command};
use super::ui::{constants, layout, render};

/// Everything the main loop reacts to. Only the main loop touches `AppState`.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    InputClosed,
    Core(Msg),
}

pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let loaded = config::load_config(&cli.config);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::initialize(
        config.log_destination,
        config.level_filter(cli.log_level.as_deref()),
    );
    match loaded {
        Ok(Some(_)) => mate_info!("Loaded config from {:?}", cli.config),
        Ok(None) => mate_info!("No config at {:?}; using defaults", cli.config),
        Err(err) => {
            mate_warn!("Ignoring config: {:#}", err);
            eprintln!("warning: ignoring config: {:#}", err);
        }
    }

    let settings = config.service_settings(cli.endpoint.as_deref())?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(settings, event_tx.clone());

    let mut app = App::new(effects);
    if OutputFormat::from(cli.format) != app.state.selected_format() {
        app.dispatch([Msg::FormatToggled], false);
    }

    match cli.url {
        Some(url) => {
            drop(event_tx);
            app.run_once(url, &event_rx)
        }
        None => {
            spawn_stdin_reader(event_tx);
            app.run_interactive(&event_rx)
        }
    }
}

struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    fn run_once(&mut self, url: String, events: &mpsc::Receiver<AppEvent>) -> Result<ExitCode> {
        self.dispatch([Msg::InputChanged(url), Msg::Submitted], true);

        while !self.state.view().is_settled() {
            let event = events
                .recv()
                .context("conversion engine stopped before answering")?;
            if let AppEvent::Core(msg) = event {
                self.dispatch([msg], true);
            }
        }

        Ok(match self.state.phase() {
            Phase::Resolved => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        })
    }

    fn run_interactive(&mut self, events: &mpsc::Receiver<AppEvent>) -> Result<ExitCode> {
        print_lines(layout::banner(self.state.selected_format()));
        print_lines(render::render(&self.state.view()));
        prompt();

        let mut closing = false;
        while let Ok(event) = events.recv() {
            match event {
                AppEvent::Line(line) => {
                    if !self.handle_command(parse_line(&line)) {
                        break;
                    }
                    prompt();
                }
                AppEvent::InputClosed => {
                    mate_debug!("Input closed; waiting for in-flight request");
                    closing = true;
                }
                AppEvent::Core(msg) => {
                    if self.dispatch([msg], true) && !closing {
                        prompt();
                    }
                }
            }
            if closing && self.state.phase() != Phase::Pending {
                break;
            }
        }

        print_lines(layout::footer(layout::current_year()));
        Ok(ExitCode::SUCCESS)
    }

    /// Returns `false` when the user asked to quit.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Link(text) => {
                self.dispatch([Msg::InputChanged(text), Msg::Submitted], true);
            }
            Command::ToggleFormat => {
                self.dispatch([Msg::FormatToggled], true);
            }
            Command::Resubmit => {
                self.dispatch([Msg::Submitted], true);
            }
            Command::Help => print_lines(layout::help()),
            Command::Quit => return false,
            Command::Unknown(word) => {
                println!("Unknown command {word}. Type {} for help.", constants::CMD_HELP[1]);
            }
        }
        true
    }

    /// Applies messages in order, runs their effects, then renders once if anything changed.
    /// Returns whether something was rendered.
    fn dispatch<I>(&mut self, msgs: I, render_changes: bool) -> bool
    where
        I: IntoIterator<Item = Msg>,
    {
        for msg in msgs {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.effects.enqueue(effects);
        }

        let view = self.state.view();
        let rendered = self.state.consume_dirty() && render_changes;
        if rendered {
            print_lines(render::render(&view));
        }
        rendered
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || forward_lines(io::stdin().lock(), &event_tx));
}

/// Sends every input line to the main loop, then `InputClosed`.
/// Bytes that are not UTF-8 are replaced instead of ending the session.
fn forward_lines<R: BufRead>(mut reader: R, event_tx: &mpsc::Sender<AppEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(['\r', '\n'])
                    .to_string();
                if event_tx.send(AppEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                mate_warn!("Stopped reading input: {}", err);
                break;
            }
        }
    }
    let _ = event_tx.send(AppEvent::InputClosed);
}

fn print_lines(lines: Vec<String>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}

fn prompt() {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{}", constants::PROMPT);
    let _ = out.flush();
}
