extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::error;
use basic::lang::Error;
use basic::mach::{Event, Options, Runtime};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::io::ErrorKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const CYCLES: usize = 5000;

pub fn main() {
    init_tracing();
    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return;
        }
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(%error, "ctrl-c handler not installed");
    }
    let interface = match Interface::new("BASIC") {
        Ok(interface) => interface,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };
    if let Err(error) = main_loop(&interface, &options, interrupted) {
        eprintln!("{}", error);
    }
    if options.wait {
        if let Err(error) = wait(&interface) {
            eprintln!("{}", error);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("BASIC_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main_loop<T: Terminal>(
    interface: &Interface<T>,
    options: &Options,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<()> {
    interface.set_report_signal(Signal::Interrupt, true);
    let screen = mortal::Terminal::new()?;
    let mut runtime = Runtime::new(options);
    let started = load(&options.source)
        .and_then(|source| runtime.load(&source))
        .and_then(|_| runtime.run());
    if let Err(error) = started {
        return print_error(interface, &error);
    }
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => interface.write_fmt(format_args!("{}", s))?,
            Event::Input(prompt) => {
                interface.set_prompt(&prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter_input(Some(&string)) {
                            interface.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        interface.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => {
                        runtime.enter_input(None);
                    }
                }
            }
            Event::Cls => screen.clear_screen()?,
            Event::Cursor(column, line) => locate(&screen, column, line)?,
            Event::Change(name) => runtime.change(load(&name)),
            Event::Error(error) => print_error(interface, &error)?,
        }
    }
    Ok(())
}

/// Moves to an absolute position by homing the cursor and stepping out from
/// the top left corner. Positions past the edge of the screen are clamped.
fn locate(screen: &mortal::Terminal, column: usize, line: usize) -> std::io::Result<()> {
    let mut writer = match screen.lock_write() {
        Ok(writer) => writer,
        Err(_) => return Err(std::io::Error::new(ErrorKind::Other, "terminal lock poisoned")),
    };
    let size = writer.size()?;
    writer.move_up(size.lines)?;
    writer.move_to_first_column()?;
    writer.move_down(line.min(size.lines.saturating_sub(1)))?;
    writer.move_right(column.min(size.columns.saturating_sub(1)))?;
    writer.flush()
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

fn wait<T: Terminal>(interface: &Interface<T>) -> std::io::Result<()> {
    interface.set_prompt("PRESS ENTER TO EXIT")?;
    interface.read_line()?;
    Ok(())
}

/// Reads a program from a file, or over the network for http and https.
fn load(name: &str) -> Result<String, Error> {
    if name.is_empty() {
        return Err(error!(BadFileName));
    }
    let lower = name.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return download(name);
    }
    match std::fs::read_to_string(name) {
        Ok(source) => Ok(source),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            }
        }
    }
}

fn download(url: &str) -> Result<String, Error> {
    tracing::debug!(url, "downloading program");
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(error!(FileNotFound; url.to_string()));
    }
    match response.error_for_status().and_then(|response| response.text()) {
        Ok(source) => Ok(source),
        Err(error) => Err(error!(InternalError; error.to_string())),
    }
}
