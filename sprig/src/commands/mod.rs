mod completions;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use sprig_core::{CONFIG_FILE, ProjectConfig};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sprig_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Scaffold components, containers, screens, lists, reducers and sagas")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project directory generated paths are relative to
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project_dir: PathBuf,

    /// Path to sprig.toml (defaults to <project-dir>/sprig.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Load the project configuration.
    ///
    /// A missing default file yields defaults; an explicitly given one must exist.
    pub fn load_config(&self) -> ProjectConfig {
        match &self.config {
            Some(path) => ProjectConfig::open(path).unwrap_or_exit(),
            None => ProjectConfig::open_or_default(self.project_dir.join(CONFIG_FILE))
                .unwrap_or_exit(),
        }
    }
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.global.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.global),
            Commands::List(cmd) => cmd.run(&self.global),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a generator (e.g., `sprig g component My/SubFolder/Test`)
    #[command(alias = "g")]
    Generate(GenerateCommand),

    /// List available generators and their options
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_alias_and_trailing_options() {
        let cli = Cli::try_parse_from([
            "sprig",
            "g",
            "list",
            "TestGrid",
            "--type=Grid",
            "--codeType",
            "listview",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    fn generate_request(args: &[&str]) -> sprig_codegen::Request {
        let cli = Cli::try_parse_from(args).unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        cmd.request().unwrap().0
    }

    #[test]
    fn test_generate_name_inside_folder() {
        let request =
            generate_request(&["sprig", "g", "component", "--folder", "Folder", "InFolder"]);

        assert_eq!(request.identifier, "Folder/InFolder");
        assert!(!request.folder);
    }

    #[test]
    fn test_generate_folder_alone_and_with_options() {
        let alone = generate_request(&["sprig", "g", "component", "--folder", "Folder"]);
        assert_eq!(alone.identifier, "Folder");
        assert!(alone.folder);

        let with_options =
            generate_request(&["sprig", "g", "list", "Photos", "--type=Grid", "--force=true"]);
        assert_eq!(with_options.identifier, "Photos");
        assert_eq!(with_options.flags["type"], "Grid");
        assert_eq!(with_options.policy, sprig_core::OverwritePolicy::Force);
    }

    #[test]
    fn test_generate_second_name_requires_folder() {
        let cli = Cli::try_parse_from(["sprig", "g", "component", "Folder", "InFolder"]).unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };

        assert!(cmd.request().is_err());
    }
}
