use anyhow::{bail, Result};
use colored::Colorize;

use crate::spinner::{next_verb, spinner_label};

/// Print `count` spinner labels, never the same verb twice in a row.
pub fn run(count: usize) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let mut rng = rand::thread_rng();
    let mut previous = None;
    for _ in 0..count {
        let verb = next_verb(previous, &mut rng);
        println!("{} {}", "✻".yellow(), spinner_label(verb));
        previous = Some(verb);
    }
    Ok(())
}
