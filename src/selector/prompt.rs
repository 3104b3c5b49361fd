use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use super::ModuleSelector;
use crate::{ModselError, Result};

/// Sequential `Module <name> [Y/n]:` prompt over any reader and writer.
///
/// A module is included only when the answer, minus its line terminator, is
/// exactly `y` or `Y`. An empty or padded answer, anything else, or end of
/// input excludes it.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, e.g. to inspect the prompts in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, module: &str) -> Result<bool> {
        write!(self.output, "Module <{}> [Y/n]: ", module)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(|e| {
            ModselError::Selection(format!("Failed to read answer for {}: {}", module, e))
        })?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(answer.trim_end_matches(['\n', '\r']).eq_ignore_ascii_case("y"))
    }
}

impl PromptSelector<BufReader<Stdin>, Stdout> {
    /// Prompt on the process terminal
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ModuleSelector for PromptSelector<R, W> {
    fn select(&mut self, catalog: &[String]) -> Result<Vec<String>> {
        let mut selected = Vec::new();
        for module in catalog {
            if self.ask(module)? {
                selected.push(module.clone());
            }
        }
        Ok(selected)
    }

    fn name(&self) -> &'static str {
        "prompt"
    }
}
