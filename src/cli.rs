use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Virtual environment manager - list, activate and remove local virtual environments
///
/// venvman keeps one directory of virtual environments (configurable with
/// `--configure`, `~/venvs` by default). It never activates anything itself:
/// `switch` prints the command for your shell to run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interactively set the virtual environment directory
    #[arg(long)]
    pub configure: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available virtual environments
    List,

    /// Print the activation command for an environment
    ///
    /// Without NAME, shows a numbered list and asks which one to use.
    Switch {
        /// Environment name (prompts when not given)
        #[arg(value_name = "NAME")]
        name: Option<OsString>,
    },

    /// Delete an environment after confirmation
    Remove {
        /// Environment name (prompts when not given)
        #[arg(value_name = "NAME")]
        name: Option<OsString>,

        /// Confirm removal without asking
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_remove_with_yes() {
        let cli = Cli::try_parse_from(["venvman", "remove", "old", "--yes"]).unwrap();
        match cli.command {
            Some(Commands::Remove { name, yes }) => {
                assert_eq!(name.as_deref(), Some(std::ffi::OsStr::new("old")));
                assert!(yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_configure_flag() {
        let cli = Cli::try_parse_from(["venvman", "--configure"]).unwrap();
        assert!(cli.configure);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_unknown_command_fails() {
        assert!(Cli::try_parse_from(["venvman", "activate"]).is_err());
    }
}
