//! Binary entrypoint: read one RiskInput from stdin, write the offline assessment to stdout.

use risk_engine::{parse_input, run};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "risk-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = Vec::new();
  io::stdin().lock().read_to_end(&mut raw)?;
  let input = parse_input(&raw)?;

  let out = run(&input);
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
