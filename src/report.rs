//! Plain-text output of benchmark records.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::bench::Measurement;

/// Writes one `Size: <int>, Presortedness: <float>, Avg Time: <float>` line
/// per record, time in seconds.
pub fn write_results<W: Write>(writer: &mut W, results: &[Measurement]) -> io::Result<()> {
    for m in results {
        writeln!(
            writer,
            "Size: {}, Presortedness: {}, Avg Time: {:.5}",
            m.size,
            m.presortedness,
            m.avg_time.as_secs_f64()
        )?;
    }

    Ok(())
}

pub fn print_results(results: &[Measurement]) -> io::Result<()> {
    let stdout = io::stdout();
    write_results(&mut stdout.lock(), results)
}

/// Writes `<name>_results.txt` in the working directory, one file per
/// algorithm.
pub fn write_results_file(name: &str, results: &[Measurement]) -> io::Result<()> {
    let file = File::create(format!("{name}_results.txt"))?;
    let mut writer = BufWriter::new(file);
    write_results(&mut writer, results)?;
    writer.flush()
}
