//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which outputs tree content
//! directly to stdout without buffering, for use with `StreamingWalker`.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::StreamingOutput;

use super::config::OutputConfig;

/// Streaming output formatter - outputs directly to stdout without buffering.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl StreamingOutput for StreamingFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            let connector = if is_last { "└── " } else { "├── " };
            write!(self.stdout, "{}{}", prefix, connector)?;
        }

        if is_dir {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        Ok(())
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        if self.config.show_report {
            writeln!(self.stdout)?;
            writeln!(
                self.stdout,
                "{} directories, {} files",
                dir_count, file_count
            )?;
        }
        Ok(())
    }
}
