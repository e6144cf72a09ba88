//! Then steps for task CRUD scenarios.

use super::world::TaskCrudWorld;
use rstest_bdd_macros::then;
use taskbook::task::domain::{Task, TaskId, TaskStatus};

fn find_task(world: &TaskCrudWorld, id: &str) -> Result<Task, eyre::Report> {
    world
        .handle()?
        .find_by_id(&TaskId::from(id))
        .ok_or_else(|| eyre::eyre!("task {id} is missing from the list"))
}

#[then("the task list has a single entry")]
fn task_list_has_a_single_entry(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let tasks = world.handle()?.tasks();
    if tasks.len() != 1 {
        return Err(eyre::eyre!("expected a single task, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the newest task is titled "{title}" with status "{status}""#)]
fn newest_task_matches(
    world: &TaskCrudWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let tasks = world.handle()?.tasks();
    let newest = tasks
        .last()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;

    if newest.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            newest.title()
        ));
    }
    if newest.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            newest.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"task "{id}" has status "{status}""#)]
fn task_has_status(world: &TaskCrudWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = find_task(world, &id)?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"task "{id}" is titled "{title}""#)]
fn task_is_titled(world: &TaskCrudWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let task = find_task(world, &id)?;

    if task.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            task.title()
        ));
    }
    Ok(())
}

#[then(r#"task "{id}" is the only remaining task"#)]
fn task_is_the_only_remaining(world: &TaskCrudWorld, id: String) -> Result<(), eyre::Report> {
    let tasks = world.handle()?.tasks();
    if tasks.len() != 1 {
        return Err(eyre::eyre!("expected a single task, found {}", tasks.len()));
    }
    let remaining = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    if remaining.id() != &TaskId::from(id.as_str()) {
        return Err(eyre::eyre!(
            "expected remaining task {id}, found {}",
            remaining.id()
        ));
    }
    Ok(())
}
