use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A tiny snapshot-based version control system",
    long_about = "jot is a local, single-user version control engine. \
    It stages copies of files, freezes them into immutable commits \
    addressed by a content hash, and keeps independent branch pointers \
    over the commit history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command copies the given files into the staging area under their basenames. \
        Paths matching an ignore pattern are skipped with a notice."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command freezes the staged files into a new immutable commit and \
        advances the active branch pointer to it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists all commits with their message, timestamp, and file list, \
        in ascending identifier order."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create a new branch",
        long_about = "This command creates a branch pointing at the active branch's current commit."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "diff",
        about = "Compare files between two branches",
        long_about = "This command compares the snapshots bound to two branches and lists \
        added, removed, and modified files."
    )]
    Diff {
        #[arg(index = 1, help = "The first branch")]
        first: String,
        #[arg(index = 2, help = "The second branch")]
        second: String,
    },
    #[command(
        name = "clone",
        about = "Copy the entire repository to a new path",
        long_about = "This command recursively duplicates the repository root, including working \
        files, staging area, commits, and branches."
    )]
    Clone {
        #[arg(index = 1, help = "The destination path")]
        destination: String,
    },
}

fn open_repository_in_pwd() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => open_repository_in_pwd()?,
            };

            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = open_repository_in_pwd()?;

            repository.add(paths)?
        }
        Commands::Commit { message } => {
            let mut repository = open_repository_in_pwd()?;

            repository.commit(message.as_str())?;
        }
        Commands::Log => {
            let repository = open_repository_in_pwd()?;

            repository.log()?;
        }
        Commands::Branch { name } => {
            let mut repository = open_repository_in_pwd()?;

            repository.branch(name)?
        }
        Commands::Diff { first, second } => {
            let mut repository = open_repository_in_pwd()?;

            repository.diff(first, second)?;
        }
        Commands::Clone { destination } => {
            let repository = open_repository_in_pwd()?;

            repository.clone_to(destination)?
        }
    }

    Ok(())
}
