//! Print a few seeded point sets with their hull and coverage.
//!
//! Usage:
//!   cargo run -p hullscan --example coverage_demo -- [count]

use hullscan::prelude::*;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12usize);
    let grid = Grid { size: 16 };
    let mut renderer = AsciiRenderer::new(AsciiCfg {
        grid,
        ..AsciiCfg::default()
    });
    let mut tok = ReplayToken::new(2025, 0);
    for i in 0..3 {
        let set = random_points(count, grid, tok);
        let hull = set.hull();
        let coverage = Coverage::of(set.as_slice(), &hull);
        println!("sample {i}:");
        print!("{}", renderer.render(set.as_slice(), &hull, &coverage));
        tok = tok.next();
    }
}
