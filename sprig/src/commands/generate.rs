use clap::Args;
use eyre::Result;
use sprig_codegen::Request;

use super::GlobalArgs;
use crate::{
    ops::{self, GenerateOptions, Switches},
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Generator to run (see `sprig list`)
    pub keyword: String,

    /// Name to generate, optionally inside folders (e.g., My/SubFolder/Test)
    pub identifier: String,

    /// Generate into a folder named after the identifier, as index files.
    /// Followed by a second name, generate that name inside the folder instead
    #[arg(long)]
    pub folder: bool,

    /// Overwrite files that already exist
    #[arg(long, conflicts_with = "skip_existing")]
    pub force: bool,

    /// Keep files that already exist and generate the rest
    #[arg(long)]
    pub skip_existing: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the manifest as JSON
    #[arg(long)]
    pub json: bool,

    /// Generator options (e.g., --type=Grid --codeType listview), optionally led by a name
    /// to place inside the --folder
    #[arg(
        value_name = "OPTIONS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub options: Vec<String>,
}

impl GenerateCommand {
    /// Build the request and the generic switches from the parsed arguments.
    pub fn request(&self) -> Result<(Request, Switches)> {
        let mut switches = Switches {
            folder: self.folder,
            force: self.force,
            skip_existing: self.skip_existing,
            dry_run: self.dry_run,
            json: self.json,
        };
        let (name, options) = match self.options.split_first() {
            Some((first, rest)) if !first.starts_with('-') => (Some(first.as_str()), rest),
            _ => (None, self.options.as_slice()),
        };
        let flags = ops::split_options(options, &mut switches)?;
        let policy = switches.policy()?;
        let (identifier, folder) = ops::target(&self.identifier, name, switches.folder)?;

        let mut request = Request::new(&self.keyword, identifier)
            .folder(folder)
            .policy(policy);
        request.flags = flags;
        Ok((request, switches))
    }

    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let (request, switches) = self.request()?;
        let config = global.load_config();

        let result = ops::generate(GenerateOptions {
            project_dir: global.project_dir(),
            config: &config,
            request,
            dry_run: switches.dry_run,
        });

        match result {
            Ok(report) => {
                self.print(&report, switches.json)?;
                Ok(())
            }
            Err(failure) => {
                if !failure.manifest.is_empty() {
                    self.print(&GenerateReport::written(failure.manifest), switches.json)?;
                }
                tracing::debug!(kind = failure.error.kind(), "generation failed");
                eprintln!("{:?}", miette::Report::new(*failure.error));
                std::process::exit(1);
            }
        }
    }

    fn print(&self, report: &GenerateReport, json: bool) -> Result<()> {
        if json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
