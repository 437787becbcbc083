use getopts::Options;
use stat_merge::dump_io::{load_dump, store_dump};
use stat_merge::merge_join::{by_cost, join_dumps, sort_dump_by};
use stat_merge::report::render_preview;
use std::time::Instant;
use std::{env, process};

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} -a FILE1 -b FILE2 -o OUTPUT [options]", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("a", "first", "first input dump", "FILE");
    opts.optopt("b", "second", "second input dump", "FILE");
    opts.optopt("o", "output", "output dump", "FILE");
    opts.optopt(
        "l",
        "limit",
        "number of preview rows to print. 0 prints all. default value is 10.",
        "LIMIT",
    );
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}", f);
            process::exit(1);
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return;
    }

    let (first_path, second_path, output_path) = match (
        matches.opt_str("a"),
        matches.opt_str("b"),
        matches.opt_str("o"),
    ) {
        (Some(a), Some(b), Some(o)) => (a, b, o),
        _ => {
            print_usage(&program, &opts);
            process::exit(1);
        }
    };
    let limit: usize = match matches.opt_str("l") {
        Some(value) => match value.parse() {
            Ok(limit) => limit,
            Err(_) => {
                eprintln!("invalid limit: {}", value);
                process::exit(1);
            }
        },
        None => 10,
    };

    let start = Instant::now();

    // Both inputs are loaded before either result is checked.
    let first = load_dump(&first_path);
    let second = load_dump(&second_path);
    let (first, second) = match (first, second) {
        (Ok(first), Ok(second)) => (first, second),
        (first, second) => {
            for err in [first.err(), second.err()].into_iter().flatten() {
                eprintln!("error loading input: {}", err);
            }
            process::exit(1);
        }
    };

    let mut merged = match join_dumps(first, second) {
        Ok(merged) => merged,
        Err(err) => {
            eprintln!("error joining dumps: {}", err);
            process::exit(1);
        }
    };
    sort_dump_by(&mut merged, by_cost);

    print!("{}", render_preview(&merged, limit));

    if let Err(err) = store_dump(&output_path, &merged) {
        eprintln!("error storing output: {}", err);
        process::exit(1);
    }

    println!(
        "\nProcessing completed in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
}
