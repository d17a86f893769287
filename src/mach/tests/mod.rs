use crate::mach::{Event, Runtime};


fn runtime(src: &str) -> Runtime {
    let mut r = Runtime::default();
    r.load(src).unwrap();
    r.run().unwrap();
    r
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
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
