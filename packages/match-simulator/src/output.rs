//! JSON-lines output for simulation results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulator::GameResult;

pub struct OutputWriter {
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Write to `path`, or to stdout when no path is given.
    pub fn new(path: Option<&Path>) -> io::Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(p) => {
                if let Some(dir) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)?;
                }
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self { writer })
    }

    pub fn write_game(&mut self, result: &GameResult) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.writer, result)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
