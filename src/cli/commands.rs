use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sl", about = concat!("[-] slate v", env!("CARGO_PKG_VERSION"), " - a to-do list that stays out of the way"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Toggle a task's completion flag
    Done(DoneArgs),
    /// Delete a task
    Rm(RmArgs),
    /// Move a task to a new position
    Mv(MvArgs),
    /// Search tasks by regex
    Find(FindArgs),
    /// Remove all completed tasks
    Clean,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only completed tasks
    #[arg(long)]
    pub done: bool,
    /// Show only pending tasks
    #[arg(long, conflicts_with = "done")]
    pub pending: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Index of the task to toggle (as shown by `sl ls`)
    pub index: usize,
}

#[derive(Args)]
pub struct RmArgs {
    /// Index of the task to delete
    pub index: usize,
}

#[derive(Args)]
pub struct MvArgs {
    /// Index of the task to move
    pub from: usize,
    /// Position it should end up at
    pub to: usize,
}

#[derive(Args)]
pub struct FindArgs {
    /// Regex pattern to search for (case-insensitive)
    pub pattern: String,
}
