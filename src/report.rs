use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub num_workers: usize,
    pub elapsed: Duration,
    pub pi: f64,
}

pub fn write_report<W: Write>(out: &mut W, result: &RunResult) -> std::io::Result<()> {
    writeln!(out, "num_processes: {}", result.num_workers)?;
    writeln!(out, "execution time: {:.2} seconds", result.elapsed.as_secs_f64())?;
    // Debug keeps a trailing ".0" on whole numbers
    writeln!(out, "estimated pi value: {:?}", result.pi)?;
    Ok(())
}
