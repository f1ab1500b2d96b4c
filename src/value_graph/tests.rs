//! Evaluation tests for the value graph.

use super::{NodeId, ValueGraph, ValueGraphError, ValueNode};
use rstest::{fixture, rstest};

#[fixture]
fn graph() -> ValueGraph {
    ValueGraph::new()
}

fn add(graph: &mut ValueGraph, parent: NodeId, child: NodeId) {
    graph
        .add_child(parent, child)
        .expect("parent should accept children");
}

fn add_constant(graph: &mut ValueGraph, parent: NodeId, value: i64) {
    let constant = graph.constant(value);
    add(graph, parent, constant);
}

#[rstest]
#[case::negative(-7)]
#[case::zero(0)]
#[case::positive(42)]
fn constant_evaluates_to_its_value(mut graph: ValueGraph, #[case] value: i64) {
    let node = graph.constant(value);
    assert_eq!(graph.evaluate(node), value);
}

#[rstest]
fn childless_max_and_sum_evaluate_to_zero(mut graph: ValueGraph) {
    let max = graph.max([]);
    let sum = graph.sum([]);
    assert_eq!(graph.evaluate(max), 0);
    assert_eq!(graph.evaluate(sum), 0);
}

#[rstest]
fn max_tracks_largest_child(mut graph: ValueGraph) {
    let x = graph.max([]);
    add_constant(&mut graph, x, 1);
    assert_eq!(graph.evaluate(x), 1);
    add_constant(&mut graph, x, 2);
    assert_eq!(graph.evaluate(x), 2);
}

#[rstest]
fn max_of_negative_children_is_negative(mut graph: ValueGraph) {
    let x = graph.max([]);
    add_constant(&mut graph, x, -3);
    add_constant(&mut graph, x, -9);
    assert_eq!(graph.evaluate(x), -3);
}

#[rstest]
fn sum_adds_children(mut graph: ValueGraph) {
    let a = graph.constant(5);
    let b = graph.constant(-2);
    let sum = graph.sum([a, b]);
    assert_eq!(graph.evaluate(sum), 3);
}

#[rstest]
fn sum_saturates_instead_of_overflowing(mut graph: ValueGraph) {
    let a = graph.constant(i64::MAX);
    let b = graph.constant(1);
    let sum = graph.sum([a, b]);
    assert_eq!(graph.evaluate(sum), i64::MAX);
}

#[rstest]
fn evaluation_reflects_later_mutation(mut graph: ValueGraph) {
    let z = graph.max([]);
    let y = graph.max([z]);
    let x = graph.max([y]);
    add_constant(&mut graph, x, 100);
    add_constant(&mut graph, y, 20);
    add_constant(&mut graph, z, 3);
    assert_eq!(graph.evaluate(x), 100);

    add_constant(&mut graph, y, 200);
    assert_eq!(graph.evaluate(x), 200);
}

#[rstest]
fn two_node_cycle_resolves_self_reference_to_zero(mut graph: ValueGraph) {
    let x = graph.max([]);
    let y = graph.max([]);
    add(&mut graph, x, y);
    add(&mut graph, y, x);
    assert_eq!(graph.evaluate(x), 0);
    assert_eq!(graph.evaluate(y), 0);

    add_constant(&mut graph, x, 10);
    add_constant(&mut graph, y, 2);
    assert_eq!(graph.evaluate(x), 10);
    assert_eq!(graph.evaluate(y), 10);

    add_constant(&mut graph, y, 11);
    assert_eq!(graph.evaluate(x), 11);
    assert_eq!(graph.evaluate(y), 11);
}

#[rstest]
fn self_loop_contributes_nothing(mut graph: ValueGraph) {
    let base = graph.constant(4);
    let sum = graph.sum([base]);
    add(&mut graph, sum, sum);
    assert_eq!(graph.evaluate(sum), 4);
}

#[rstest]
fn shared_node_is_counted_on_every_path(mut graph: ValueGraph) {
    let shared = graph.constant(3);
    let left = graph.sum([shared]);
    let right = graph.sum([shared]);
    let top = graph.sum([left, right]);
    assert_eq!(graph.evaluate(top), 6);
}

#[rstest]
fn diamond_revisit_is_not_treated_as_a_cycle(mut graph: ValueGraph) {
    let bottom = graph.sum([]);
    add_constant(&mut graph, bottom, 5);
    let left = graph.max([bottom]);
    let right = graph.max([bottom]);
    let top = graph.sum([left, right]);
    assert_eq!(graph.evaluate(top), 10);
}

#[rstest]
fn add_child_rejects_constant_parent(mut graph: ValueGraph) {
    let constant = graph.constant(1);
    let other = graph.constant(2);
    assert_eq!(
        graph.add_child(constant, other),
        Err(ValueGraphError::ConstantHasNoChildren(constant))
    );
}

#[rstest]
fn add_child_rejects_foreign_handles(mut graph: ValueGraph) {
    let mut other = ValueGraph::new();
    let _ = other.constant(0);
    let _ = other.constant(0);
    let foreign = other.constant(9);
    let max = graph.max([]);

    assert_eq!(
        graph.add_child(max, foreign),
        Err(ValueGraphError::UnknownNode(foreign))
    );
    assert_eq!(
        graph.add_child(foreign, max),
        Err(ValueGraphError::UnknownNode(foreign))
    );
    assert_eq!(graph.evaluate(foreign), 0);
    assert_eq!(graph.node(max), Some(&ValueNode::Max(Vec::new())));
}
