use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noteweave", version, about = "Compose Markdown notes from frontmatter templates")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new note from selected templates
    New {
        /// Note name, appended to the timestamp prefix
        name: Option<String>,
        /// Template to merge, in order (repeatable)
        #[arg(long = "template", value_name = "NAME")]
        templates: Vec<String>,
        /// Print the composed note instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List templates in the template folder
    List,
    /// Scaffold noteweave.toml and starter templates
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::New { name, templates, stdout } => {
            noteweave_core::cmd_new(name.as_deref(), &templates, stdout)?
        }
        Command::List => noteweave_core::cmd_list()?,
        Command::Init { force } => noteweave_core::cmd_init(force)?,
    }
    Ok(())
}
