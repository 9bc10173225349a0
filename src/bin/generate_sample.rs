use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use nba_dashboard::config::DEFAULT_DATA_PATH;

const TEAMS: [&str; 10] = [
    "BOS", "DEN", "GSW", "LAL", "MIA", "MIL", "NYK", "OKC", "PHI", "PHO",
];

/// (position, base points per game, share of the league in percent)
const POSITIONS: [(&str, f64, u64); 5] = [
    ("C", 10.5, 20),
    ("PF", 10.0, 20),
    ("SF", 10.8, 20),
    ("SG", 11.2, 20),
    ("PG", 12.0, 20),
];

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Pos")]
    pos: &'static str,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Tm")]
    team: &'static str,
    #[serde(rename = "G")]
    games: u32,
    #[serde(rename = "MP")]
    minutes: f64,
    #[serde(rename = "PTS")]
    points: f64,
}

/// Scoring peaks in the late twenties and tails off on both sides.
fn age_factor(age: u32) -> f64 {
    let d = age as f64 - 27.0;
    (1.0 - 0.004 * d * d).max(0.35)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn pick_position(rng: &mut SimpleRng) -> (&'static str, f64) {
    let total: u64 = POSITIONS.iter().map(|p| p.2).sum();
    let mut roll = rng.below(total);
    for &(pos, base, share) in &POSITIONS {
        if roll < share {
            return (pos, base);
        }
        roll -= share;
    }
    (POSITIONS[0].0, POSITIONS[0].1)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let n_players = 480;
    for i in 0..n_players {
        let (pos, base) = pick_position(&mut rng);
        let age = 19 + rng.below(21) as u32;
        let minutes = rng.gauss(22.0, 8.0).clamp(4.0, 38.0);
        let points = (base * age_factor(age) * minutes / 24.0 + rng.gauss(0.0, 2.5)).max(0.0);

        writer
            .serialize(Row {
                player: format!("Player {:03}", i + 1),
                pos,
                age,
                team: TEAMS[rng.below(TEAMS.len() as u64) as usize],
                games: 10 + rng.below(73) as u32,
                minutes: round1(minutes),
                points: round1(points),
            })
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n_players} players to {}", output_path.display());
    Ok(())
}
