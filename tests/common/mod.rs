#![allow(dead_code)]
use basic::mach::{Event, Runtime};

/// Loads and starts a program, panicking on load errors.
pub fn runtime(src: &str) -> Runtime {
    let mut r = Runtime::default();
    r.load(src).unwrap();
    r.run().unwrap();
    r
}

/// Load error text, or an empty string when the program loads.
pub fn load_error(src: &str) -> String {
    match Runtime::default().load(src) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::Cls => {
                s.push_str("[CLS]");
            }
            Event::Cursor(x, y) => {
                s.push_str(&format!("[{},{}]", x, y));
            }
            Event::Change(name) => {
                s.push_str(&format!("[CHANGE {}]", name));
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Runs to completion, answering each `INPUT` prompt from `answers`.
/// Typed answers are echoed after their prompt.
pub fn exec_with_input(runtime: &mut Runtime, answers: &[&str]) -> String {
    let mut s = String::new();
    let mut answers = answers.iter();
    loop {
        let out = exec(runtime);
        s.push_str(&out);
        match runtime.execute(0) {
            Event::Input(_) => match answers.next() {
                Some(answer) => {
                    s.push_str(answer);
                    s.push('\n');
                    runtime.enter_input(Some(*answer));
                }
                None => {
                    runtime.enter_input(None);
                }
            },
            _ => break,
        }
    }
    s
}

/// Runs a program from source, returning everything it printed.
pub fn run_program(src: &str) -> String {
    exec(&mut runtime(src))
}
