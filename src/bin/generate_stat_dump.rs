use getopts::Options;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stat_merge::dump_io::store_dump;
use stat_merge::stat_record::StatRecord;
use std::{env, process};

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} -o FILE -n COUNT [options]", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("o", "output", "set output file name", "NAME");
    opts.optopt("n", "records", "number of records to generate", "COUNT");
    opts.optopt(
        "s",
        "seed",
        "rng seed for reproducible dumps. default value is 0.",
        "SEED",
    );
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => panic!("{}", f.to_string()),
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return;
    }

    let output_file = matches
        .opt_str("o")
        .unwrap_or("generate_stat_dump_out.bin".to_string());
    let record_count: usize = match matches.opt_str("n") {
        Some(value) => value.parse().expect("COUNT must be a number"),
        None => {
            print_usage(&program, &opts);
            process::exit(1);
        }
    };
    let seed: u64 = matches
        .opt_str("s")
        .map(|value| value.parse().expect("SEED must be a number"))
        .unwrap_or(0);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut records: Vec<StatRecord> = Vec::with_capacity(record_count);
    for _ in 0..record_count {
        records.push(StatRecord::new(
            rng.gen_range(0..1_000_000),
            rng.gen_range(0..10_000),
            rng.gen_range(0.0..100.0),
            rng.gen_bool(0.5),
            rng.gen_range(0..8),
        ));
    }

    if let Err(err) = store_dump(&output_file, &records) {
        eprintln!("error storing dump: {}", err);
        process::exit(1);
    }
    eprintln!("wrote {} records to {}", records.len(), output_file);
}
