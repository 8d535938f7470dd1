#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::env;
use std::time::Instant;

use sparse_life::sparselife::{LifeWorld, random_generation};

#[derive(Clone, Debug)]
struct BenchConfig {
    density: f64,
    warmup: u64,
    iters: u64,
    seed: u64,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            density: 0.33,
            warmup: 10,
            iters: 1000,
            seed: 0x5EED_1234_ABCD_EF01,
            json: false,
        }
    }
}

fn parse_args() -> BenchConfig {
    let mut cfg = BenchConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--density" => {
                if let Some(v) = args.next() {
                    cfg.density = v.parse().expect("--density expects f64");
                }
            }
            "--warmup" => {
                if let Some(v) = args.next() {
                    cfg.warmup = v.parse().expect("--warmup expects u64");
                }
            }
            "--iters" => {
                if let Some(v) = args.next() {
                    cfg.iters = v.parse().expect("--iters expects u64");
                }
            }
            "--seed" => {
                if let Some(v) = args.next() {
                    cfg.seed = if let Some(hex) = v.strip_prefix("0x") {
                        u64::from_str_radix(hex, 16).expect("--seed hex parse failed")
                    } else {
                        v.parse().expect("--seed expects u64")
                    };
                }
            }
            "--json" => {
                cfg.json = true;
            }
            other => panic!("unknown arg: {other}"),
        }
    }
    cfg
}

fn main() {
    let cfg = parse_args();

    let mut world = LifeWorld::from_cells(random_generation(cfg.seed, cfg.density));

    if cfg.warmup > 0 {
        world.step_n(cfg.warmup);
    }

    let start = Instant::now();
    world.step_n(cfg.iters);
    let elapsed = start.elapsed();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / cfg.iters as f64;
    let population = world.population();

    if cfg.json {
        println!(
            "{{\"density\":{},\"warmup\":{},\"iters\":{},\"seed\":{},\"total_ms\":{:.6},\"avg_ms\":{:.6},\"population\":{}}}",
            cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, population,
        );
    } else {
        println!(
            "density={},warmup={},iters={},seed={},total_ms={:.6},avg_ms={:.6},population={}",
            cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, population,
        );
    }
}
