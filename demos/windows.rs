use std::env;
use std::process;
use windowing_rs::{
    classify_ip_address, decode_nested_runs, find_anagram_indices, min_window_substring,
    sliding_window_max, sliding_window_min,
};

/// Runs one algorithm on command-line input.
///
/// Usage:
///   cargo run --example windows max <k> <n1> <n2> ...
///   cargo run --example windows min <k> <n1> <n2> ...
///   cargo run --example windows cover <text> <pattern>
///   cargo run --example windows anagrams <text> <pattern>
///   cargo run --example windows decode <encoded>
///   cargo run --example windows ip <address>
///
/// Set `RUST_LOG=debug` (or `trace`) to see the library's log output.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        usage();
    };

    match (command.as_str(), rest) {
        ("max" | "min", [width, values @ ..]) => {
            let width: usize = width.parse().unwrap_or_else(|_| {
                eprintln!("Window width \"{}\" is not a number.", width);
                process::exit(1);
            });
            let values: Vec<i64> = values
                .iter()
                .map(|v| {
                    v.parse().unwrap_or_else(|_| {
                        eprintln!("Value \"{}\" is not an integer.", v);
                        process::exit(1);
                    })
                })
                .collect();

            let result = if command == "max" {
                sliding_window_max(&values, width)
            } else {
                sliding_window_min(&values, width)
            };
            match result {
                Ok(extrema) => println!("{:?}", extrema),
                Err(err) => fail(err),
            }
        }
        ("cover", [text, pattern]) => match min_window_substring(text, pattern).into_option() {
            Some(window) => println!("{}", window),
            None => println!("(no window)"),
        },
        ("anagrams", [text, pattern]) => {
            println!("{:?}", find_anagram_indices(text, pattern));
        }
        ("decode", [encoded]) => match decode_nested_runs(encoded) {
            Ok(decoded) => println!("{}", decoded),
            Err(err) => fail(err),
        },
        ("ip", [address]) => println!("{}", classify_ip_address(address)),
        _ => usage(),
    }
}

fn fail(err: windowing_rs::Error) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn usage() -> ! {
    eprintln!("Usage: windows <max|min|cover|anagrams|decode|ip> <args>...");
    process::exit(1);
}
