use super::CommandHandler;
use crate::cli::Cli;
use crate::config::ConfigLoader;
use crate::io::{DiskFs, FileSystem, ProjectPaths};
use crate::pipeline::{GenerationReport, Generator};
use crate::selector::{detect_selector, ModuleSelector};
use crate::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Handler for the module generation run
pub struct GenerateCommand {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub no_tui: bool,
}

impl CommandHandler for GenerateCommand {
    fn execute(&self) -> Result<()> {
        let mut selector = detect_selector(self.no_tui);
        self.run_with(&DiskFs, selector.as_mut(), &mut io::stdout())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "generate"
    }
}

impl GenerateCommand {
    /// Create new generate command
    pub fn new(root: PathBuf, config: Option<PathBuf>, no_tui: bool) -> Self {
        Self {
            root,
            config,
            no_tui,
        }
    }

    /// Run against an explicit filesystem and selector, reporting to `out`
    pub fn run_with<F: FileSystem + ?Sized, W: Write>(
        &self,
        fs: &F,
        selector: &mut dyn ModuleSelector,
        out: &mut W,
    ) -> Result<GenerationReport> {
        let mut loader = ConfigLoader::new();
        if let Some(config) = &self.config {
            loader = loader.with_file(config);
        }
        let config = loader.load(fs, &self.root)?;
        let paths = ProjectPaths::for_root(&self.root, &config.layout);
        debug!("Resolved project paths: {:?}", paths);

        let generator = Generator::new(fs, paths, &config);

        generator.restore_with(|path| {
            writeln!(out, "Restored {}", path.display())?;
            Ok(())
        })?;

        let report = generator.run(selector)?;
        writeln!(out, "Modules loaded successfully")?;
        Ok(report)
    }
}

impl From<&Cli> for GenerateCommand {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.root.clone(), cli.config.clone(), cli.no_tui)
    }
}
