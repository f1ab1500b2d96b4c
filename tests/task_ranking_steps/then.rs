//! Then steps for task ranking scenarios.

use super::world::RankingWorld;
use rstest_bdd_macros::then;
use taskrank::task::{domain::Task, services::TaskRankingError};

fn find<'a>(ranked: &'a [Task], id: &str) -> Result<&'a Task, eyre::Report> {
    ranked
        .iter()
        .find(|task| task.id().as_str() == id)
        .ok_or_else(|| eyre::eyre!("task {id} missing from ranking"))
}

#[then(r#"the ranking is "{order}""#)]
fn ranking_is(world: &RankingWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = order.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .ranked()?
        .iter()
        .map(|task| task.id().as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected ranking {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the task "{id}" has score {score:i64}"#)]
fn task_has_score(world: &RankingWorld, id: String, score: i64) -> Result<(), eyre::Report> {
    let task = find(world.ranked()?, &id)?;
    if task.score() != score {
        return Err(eyre::eyre!(
            "expected {id} to score {score}, found {}",
            task.score()
        ));
    }
    Ok(())
}

#[then(r#"the task "{id}" is flagged "{flag}""#)]
fn task_is_flagged(world: &RankingWorld, id: String, flag: String) -> Result<(), eyre::Report> {
    let task = find(world.ranked()?, &id)?;
    if !task.labels().has("flag", &flag) {
        return Err(eyre::eyre!("expected {id} to carry flag {flag}"));
    }
    Ok(())
}

#[then(r#"ranking fails because source "{source}" is unavailable"#)]
fn ranking_fails_for_source(world: &RankingWorld, source: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing ranking result in scenario world"))?;
    match result {
        Err(TaskRankingError::Source(err)) if err.source_name() == Some(source.as_str()) => Ok(()),
        other => Err(eyre::eyre!(
            "expected failure from source {source}, got {other:?}"
        )),
    }
}
