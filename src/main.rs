use std::env;
use std::process::ExitCode;

use toolkit::fs::read_lines_bytes;
use toolkit::range;
use toolkit::seq::{cycle, enumerate, walk};
use toolkit::time::TimeIt;

fn main() -> ExitCode {
    env_logger::init();

    println!("\n[cycle]\n");

    let to_cycle = [1, 2, 3];
    let iterations = 10;
    println!("cycling over {to_cycle:?}, stopping after {iterations} items");
    for (i, v) in enumerate(cycle(&to_cycle)) {
        if i == iterations {
            break;
        }
        println!("{v}");
    }

    let actions: [fn(); 3] = [|| println!("foo"), || println!("bar"), || println!("baz")];
    println!("cycling over functions, calling each, stopping after {iterations} calls");
    let mut calls = 0;
    walk(cycle(&actions), |action| {
        action();
        calls += 1;
        calls < iterations
    });

    println!("\n[range]\n");

    let (low, high, step) = (3, 7, 2);
    println!("ranging over [{low}, {high}) with step {step}");
    for v in range!(low, high, step) {
        println!("{v}");
    }

    println!("\n[read_lines_bytes]\n");

    let path = env::args().nth(1).unwrap_or_else(|| String::from("Cargo.toml"));
    let _timer = TimeIt::start(format!("reading {path}"));
    match read_lines_bytes(&path) {
        Ok(lines) => {
            for line in lines {
                println!("{}", String::from_utf8_lossy(&line));
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        },
    }
}
