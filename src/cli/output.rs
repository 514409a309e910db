use serde::Serialize;

use crate::model::task::TaskItem;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub index: usize,
    pub text: &'a str,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub tasks: Vec<TaskJson<'a>>,
}

// ---------------------------------------------------------------------------
// Conversions and plain rendering
// ---------------------------------------------------------------------------

pub fn task_to_json(index: usize, task: &TaskItem) -> TaskJson<'_> {
    TaskJson {
        index,
        text: &task.text,
        completed: task.completed,
    }
}

/// One plain-text row: `  3 [x] Walk dog`
pub fn format_task_line(index: usize, task: &TaskItem) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    format!("{:>3} [{}] {}", index, check, task.text)
}

/// Render the whole list, either as JSON or as plain rows. Indices are the
/// positions in the full list, so `--done`/`--pending` filtered output still
/// addresses tasks correctly for `done`/`rm`/`mv`.
pub fn print_tasks<'a, I>(entries: I, json: bool)
where
    I: Iterator<Item = (usize, &'a TaskItem)>,
{
    if json {
        let tasks: Vec<TaskJson> = entries.map(|(i, t)| task_to_json(i, t)).collect();
        let list = TaskListJson { tasks };
        println!("{}", serde_json::to_string_pretty(&list).unwrap());
    } else {
        let mut any = false;
        for (i, task) in entries {
            any = true;
            println!("{}", format_task_line(i, task));
        }
        if !any {
            println!("(no tasks)");
        }
    }
}
