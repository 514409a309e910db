use std::error::Error;
use std::path::Path;

use regex::Regex;

use crate::cli::commands::{AddArgs, Cli, Commands, DoneArgs, FindArgs, ListArgs, MvArgs, RmArgs};
use crate::cli::output::{self, format_task_line};
use crate::io::paths::data_dir;
use crate::io::store_io::{load_tasks, save_tasks};
use crate::ops::action::{self, Action};
use crate::ops::list_ops::{self, StoreError};

/// Dispatch a parsed CLI invocation. Every command operates on the persisted
/// list: load, mutate through the action reducer, save.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let dir = data_dir(cli.data_dir.as_deref());
    let command = cli.command.expect("main routes None to the TUI");

    match command {
        Commands::List(args) => cmd_list(&dir, &args, cli.json),
        Commands::Add(args) => cmd_add(&dir, &args, cli.json),
        Commands::Done(args) => cmd_done(&dir, &args, cli.json),
        Commands::Rm(args) => cmd_rm(&dir, &args, cli.json),
        Commands::Mv(args) => cmd_mv(&dir, &args, cli.json),
        Commands::Find(args) => cmd_find(&dir, &args, cli.json),
        Commands::Clean => cmd_clean(&dir, cli.json),
    }
}

fn cmd_list(dir: &Path, args: &ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let tasks = load_tasks(dir);
    let entries = tasks.iter().enumerate().filter(|(_, t)| {
        if args.done {
            t.completed
        } else if args.pending {
            !t.completed
        } else {
            true
        }
    });
    output::print_tasks(entries, json);
    Ok(())
}

fn cmd_add(dir: &Path, args: &AddArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(dir);
    action::apply_to_list(&mut tasks, &Action::Add(args.text.clone()))?;
    save_tasks(dir, &tasks)?;
    let index = tasks.len() - 1;
    if json {
        output::print_tasks(tasks.iter().enumerate().skip(index), true);
    } else {
        println!("added {}", format_task_line(index, &tasks[index]));
    }
    Ok(())
}

fn cmd_done(dir: &Path, args: &DoneArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(dir);
    action::apply_to_list(&mut tasks, &Action::Toggle(args.index))?;
    save_tasks(dir, &tasks)?;
    if json {
        output::print_tasks(tasks.iter().enumerate().skip(args.index).take(1), true);
    } else {
        println!("{}", format_task_line(args.index, &tasks[args.index]));
    }
    Ok(())
}

fn cmd_rm(dir: &Path, args: &RmArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(dir);
    let removed = list_ops::delete_task(&mut tasks, args.index)?;
    save_tasks(dir, &tasks)?;
    if json {
        output::print_tasks(tasks.iter().enumerate(), true);
    } else {
        println!("deleted: {}", removed.text);
    }
    Ok(())
}

/// `mv` expresses the move as a permutation and hands it to the reorder
/// path, so it gets the same validation as a TUI drag.
fn cmd_mv(dir: &Path, args: &MvArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(dir);
    let order = move_order(tasks.len(), args.from, args.to)?;
    action::apply_to_list(&mut tasks, &Action::Reorder(order))?;
    save_tasks(dir, &tasks)?;
    output::print_tasks(tasks.iter().enumerate(), json);
    Ok(())
}

fn cmd_find(dir: &Path, args: &FindArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let re = Regex::new(&format!("(?i){}", args.pattern))?;
    let tasks = load_tasks(dir);
    let hits = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| re.is_match(&t.text));
    output::print_tasks(hits, json);
    Ok(())
}

fn cmd_clean(dir: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks = load_tasks(dir);
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    save_tasks(dir, &tasks)?;
    if json {
        output::print_tasks(tasks.iter().enumerate(), true);
    } else {
        println!("removed {} completed task(s)", before - tasks.len());
    }
    Ok(())
}

/// Build the `newOrderIndices` permutation that moves `from` to `to`.
fn move_order(len: usize, from: usize, to: usize) -> Result<Vec<usize>, StoreError> {
    if from >= len {
        return Err(StoreError::OutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(StoreError::OutOfBounds { index: to, len });
    }
    let mut order: Vec<usize> = (0..len).collect();
    let moved = order.remove(from);
    order.insert(to, moved);
    Ok(order)
}
