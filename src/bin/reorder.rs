//! Reads a reorder problem from stdin and prints the final sequence to stdout
//!
//! See [`hyperion::io`] for the input format.

use anyhow::Context;
use hyperion::io::{parse_input, solve, write_sequence};
use std::io::{self, BufWriter, Read, Write};

fn main() -> anyhow::Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read input")?;

    let input = parse_input(&text).context("malformed input")?;
    let query_count = input.queries.len();
    let tree = solve(input).with_context(|| format!("failed to apply {query_count} queries"))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_sequence(&mut out, &tree).context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(())
}
