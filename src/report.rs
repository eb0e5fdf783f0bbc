//! Prints scores the way the evolutionary framework reads them back: the
//! decimal value followed by a newline, nothing else.

use std::io::{self, Write};

use log::debug;

use crate::fitness::{Fitness, evaluate};
use crate::source::ValueSource;

/// Writes `fitness` to `out`. For the process output, pass
/// `&mut io::stdout().lock()`.
pub fn write_score<W: Write + ?Sized>(out: &mut W, fitness: Fitness) -> io::Result<()> {
    writeln!(out, "{fitness}")
}

/// One full harness run: evaluate a single candidate and report its score.
pub fn run<S, W>(source: &mut S, out: &mut W) -> io::Result<Fitness>
where
    S: ValueSource + ?Sized,
    W: Write + ?Sized,
{
    let fitness = evaluate(source);
    write_score(out, fitness)?;
    out.flush()?;
    debug!("reported fitness {fitness}/{}", Fitness::MAX);
    Ok(fitness)
}
