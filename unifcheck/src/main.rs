use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randlib::Sub55;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (nsamps, nbins, seed) = if args.len() == 4 {
        (
            args[1].parse::<usize>().expect("Invalid nsamples"),
            args[2].parse::<usize>().expect("Invalid nbins"),
            args[3].parse::<i32>().expect("Invalid seed"),
        )
    } else if args.len() == 1 {
        // Default values
        (100000, 10, 42)
    } else {
        print_usage();
        process::exit(1);
    };

    if nsamps < 100 || nbins < 2 || nbins > 10000 {
        print_usage();
        process::exit(1);
    }

    let mut counts = vec![0usize; nbins];
    let mut rng = Sub55::new(seed);
    for _ in 0..nsamps {
        let bin = rng.next_below(nbins as i32).expect("nbins is validated") as usize;
        counts[bin] += 1;
    }

    // Same tally from the rand StdRng as a baseline for comparison.
    let mut baseline = vec![0usize; nbins];
    let mut std_rng = StdRng::seed_from_u64(seed as u64);
    for _ in 0..nsamps {
        baseline[std_rng.gen_range(0..nbins)] += 1;
    }

    let expected = nsamps as f64 / nbins as f64;

    println!("\nnsamps={}  nbins={}  seed={}  expected per bin={:.1}", nsamps, nbins, seed, expected);
    println!("\n{:>6}  {:>10}  {:>10}", "bin", "sub55", "stdrng");
    for i in 0..nbins {
        println!("{:>6}  {:>10}  {:>10}", i, counts[i], baseline[i]);
    }

    let df = (nbins - 1) as f64;
    println!("\nchi-square (df={:.0}, mean under uniformity={:.0}, sd={:.1})", df, df, (2.0 * df).sqrt());
    println!("  sub55  = {:.3}", chi_square(&counts, expected));
    println!("  stdrng = {:.3}", chi_square(&baseline, expected));
}

fn chi_square(counts: &[usize], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&obs| {
            let diff = obs as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn print_usage() {
    println!("\nUsage: unifcheck nsamples nbins seed");
    println!("  nsamples - Number of draws to tally (at least 100)");
    println!("  nbins - Number of bins (2 to 10000)");
    println!("  seed - Generator seed");
}
