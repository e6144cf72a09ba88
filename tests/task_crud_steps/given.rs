//! Given steps for task CRUD scenarios.

use super::world::{TaskCrudWorld, seeded_task};
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskCrudWorld) {
    world.seed(Vec::new());
}

#[given(r#"a task list containing task "{id}" titled "{title}""#)]
fn task_list_with_one_task(world: &mut TaskCrudWorld, id: String, title: String) {
    world.seed(vec![seeded_task(&id, &title)]);
}

#[given(r#"a task list containing tasks "{first}" and "{second}""#)]
fn task_list_with_two_tasks(world: &mut TaskCrudWorld, first: String, second: String) {
    world.seed(vec![
        seeded_task(&first, "First"),
        seeded_task(&second, "Second"),
    ]);
}
