use clap::Parser;
use incremental_delaunay::{triangulate, DuplicatePolicy, Point, TriangulationConfig};

/// Triangulates a set of 2D points and prints the resulting triangles.
#[derive(Parser)]
struct Args {
    /// Points as "x,y" pairs, e.g. `0,0 4,0 4,4 0,4 2,2`.
    #[arg(required = true)]
    points: Vec<String>,

    /// Seed for the de Berg construction's insertion order (ignored here;
    /// this demo always uses Bowyer-Watson, which has no randomness).
    #[arg(long)]
    seed: Option<u64>,

    /// Error out on duplicate points instead of silently skipping them.
    #[arg(long)]
    strict_duplicates: bool,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {raw:?}"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("bad x in {raw:?}"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("bad y in {raw:?}"))?;
    Ok(Point::new(x, y))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let points: Vec<Point> = args
        .points
        .iter()
        .map(|s| parse_point(s).unwrap_or_else(|e| panic!("{e}")))
        .collect();

    let config = TriangulationConfig {
        duplicate_policy: if args.strict_duplicates {
            DuplicatePolicy::Error
        } else {
            DuplicatePolicy::Skip
        },
        seed: args.seed,
        ..TriangulationConfig::default()
    };

    match triangulate(&points, &config) {
        Ok((triangulation, _store)) => {
            for t in triangulation.triangles().iter().filter(|t| !t.is_ghost()) {
                println!("({}, {}, {})", t.i(), t.j(), t.k());
            }
        }
        Err(err) => {
            eprintln!("triangulation failed: {err}");
            std::process::exit(1);
        }
    }
}
