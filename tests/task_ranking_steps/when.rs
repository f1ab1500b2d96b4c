//! When steps for task ranking scenarios.

use std::sync::Arc;

use super::world::{RankingWorld, run_async};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use taskrank::task::{
    adapters::{AggregatedSource, GoalTaskSource, memory::StaticTaskSource},
    services::TaskRankingService,
};

#[when("the tasks are ranked")]
fn rank_tasks(world: &mut RankingWorld) {
    let mut aggregated = AggregatedSource::new();
    for fixture in &world.sources {
        let source = StaticTaskSource::new(fixture.name.as_str(), fixture.tasks.clone());
        if fixture.unavailable {
            source.fail_with("service unavailable");
        }
        aggregated = aggregated.with_source(source);
    }
    aggregated = aggregated.with_source(GoalTaskSource::new(Arc::clone(&world.state)));

    let service = TaskRankingService::new(
        Arc::new(aggregated),
        Arc::clone(&world.state),
        Arc::new(DefaultClock),
    );
    world.last_result = Some(run_async(service.rank(&world.config)));
}
