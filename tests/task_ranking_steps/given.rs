//! Given steps for task ranking scenarios.

use super::world::RankingWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskrank::{
    config::{ScoreRule, TeamMember},
    task::domain::{Goal, Marker, Task, TaskId},
};

#[given(r#"a team led by "{member}""#)]
fn team_led_by(world: &mut RankingWorld, member: String) {
    world.config = std::mem::take(&mut world.config).with_team_member(TeamMember::new(member));
}

#[given(r#"a score rule "{key}" = "{value}" worth {score:i64}"#)]
fn score_rule(world: &mut RankingWorld, key: String, value: String, score: i64) {
    world.config =
        std::mem::take(&mut world.config).with_score_rule(ScoreRule::new(key, value, score));
}

#[given(r#"a task "{id}" from source "{source}""#)]
fn task_from_source(world: &mut RankingWorld, id: String, source: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id.as_str()).wrap_err("construct task id")?;
    world.update_source(&source, |fixture| {
        fixture.tasks.push(Task::new(task_id, format!("Task {id}")));
    });
    Ok(())
}

#[given(r#"the task "{id}" is labelled "{key}" = "{value}""#)]
fn task_is_labelled(
    world: &mut RankingWorld,
    id: String,
    key: String,
    value: String,
) -> Result<(), eyre::Report> {
    let task = world
        .task_mut(&id)
        .ok_or_else(|| eyre::eyre!("unknown task {id} in scenario world"))?;
    task.labels_mut().add(key, value);
    Ok(())
}

#[given(r#"the source "{source}" is unavailable"#)]
fn source_is_unavailable(world: &mut RankingWorld, source: String) {
    world.update_source(&source, |fixture| fixture.unavailable = true);
}

#[given(r#"a goal "{goal}""#)]
fn goal_exists(world: &mut RankingWorld, goal: String) -> Result<(), eyre::Report> {
    if !world.state.add_goal(Goal::new(goal.as_str(), 0)) {
        return Err(eyre::eyre!("goal {goal} already exists"));
    }
    Ok(())
}

#[given(r#"the task "{id}" has the local parent "{parent}""#)]
fn task_has_local_parent(
    world: &mut RankingWorld,
    id: String,
    parent: String,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task id")?;
    let parent_id = TaskId::new(parent).wrap_err("construct parent id")?;
    world.state.set_task_parent(&task_id, parent_id);
    Ok(())
}

#[given(r#"the task "{id}" is marked "{marker}""#)]
fn task_is_marked(world: &mut RankingWorld, id: String, marker: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task id")?;
    world.state.add_task_marker(&task_id, Marker::new(marker));
    Ok(())
}
