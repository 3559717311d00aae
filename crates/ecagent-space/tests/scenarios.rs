use ecagent_core::{ModelId, Position};
use ecagent_space::{CubeWorld, GridWorld, LatticeConfig, LineWorld, PlacementError};
use ecagent_test_utils::{agent, agents, ids, Grass, TEST_MODEL};

#[test]
fn line_world_add_query_reject_remove() {
    let mut world = LineWorld::new([4], TEST_MODEL).unwrap();

    world.add_agent(agent("A"), [2]).unwrap();
    assert_eq!(ids(&world.agents_at(&[2])), ["A"]);
    assert!(world.agents_at(&[0]).is_empty());

    let err = world.add_agent(agent("B"), [5]).unwrap_err();
    assert!(matches!(err.reason(), PlacementError::OutOfBounds { .. }));
    assert_eq!(world.agent_count(), 1);

    world.remove_agent(&"A".into());
    assert!(world.agents_at(&[2]).is_empty());
}

#[test]
fn grid_world_dimensions_and_cells() {
    let world = GridWorld::new([3, 3], TEST_MODEL).unwrap();
    assert_eq!(world.dimensions(), [3, 3]);
    assert!(world.cell(&[2, 2]).is_some());
    assert!(world.cell(&[3, 0]).is_none());
}

#[test]
fn three_by_two_has_six_cells_in_x_fastest_order() {
    let world = GridWorld::new([3, 2], TEST_MODEL).unwrap();
    let coords: Vec<[i32; 2]> = world
        .cells()
        .map(|c| c.position().unwrap().to_coord())
        .collect();
    assert_eq!(
        coords,
        vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]
    );
}

#[test]
fn removal_is_idempotent() {
    let mut world = GridWorld::new([2, 2], TEST_MODEL).unwrap();
    world.add_agent(agent("a"), [0, 1]).unwrap();
    world.add_agent(agent("b"), [1, 1]).unwrap();

    assert!(world.remove_agent(&"a".into()).is_some());
    assert!(world.remove_agent(&"a".into()).is_none());
    assert!(world.remove_agent(&"never".into()).is_none());
    assert_eq!(world.agent_count(), 1);
    assert_eq!(ids(&world.agents_at(&[1, 1])), ["b"]);
}

#[test]
fn cube_world_places_on_every_axis() {
    let mut world = CubeWorld::new([3, 4, 5], TEST_MODEL).unwrap();
    world.add_agent(agent("deep"), [2, 3, 4]).unwrap();
    assert_eq!(ids(&world.agents_at(&[2, 3, 4])), ["deep"]);
    assert!(world.agents_at(&[2, 3, 0]).is_empty());

    let err = world.add_agent(agent("under"), [0, 0, 5]).unwrap_err();
    assert_eq!(err.into_agent().id().as_str(), "under");
    assert_eq!(world.agent_count(), 1);
}

#[test]
fn config_round_trip_builds_equivalent_lattice() {
    let config = LatticeConfig::new([5, 2]).with_id("pasture");
    config.validate().unwrap();
    let mut world = config.build(ModelId(11)).unwrap();

    world.add_cell_component(|cell| {
        cell.add_component(Grass(3));
    });
    assert!(world.cells().all(|c| c.get::<Grass>() == Some(&Grass(3))));
    assert_eq!(world.id(), "pasture");
    assert_eq!(world.environment().model(), ModelId(11));
}

#[test]
fn many_agents_share_one_cell_and_leave_in_any_order() {
    let mut world = LineWorld::new([2], TEST_MODEL).unwrap();
    for a in agents(5) {
        world.add_agent(a, [1]).unwrap();
    }
    assert_eq!(world.agents_at(&[1]).len(), 5);

    world.remove_agent(&"agent_0".into());
    world.remove_agent(&"agent_3".into());
    let mut left = ids(&world.agents_at(&[1]));
    left.sort();
    assert_eq!(left, ["agent_1", "agent_2", "agent_4"]);
}

#[test]
fn rebinding_preserves_cells_and_registry() {
    let mut world = GridWorld::new([3, 3], TEST_MODEL).unwrap();
    world.add_agent(agent("a"), [1, 2]).unwrap();
    let before: Vec<Position> = world.cells().map(|c| *c.position().unwrap()).collect();

    let next = ModelId::next();
    world.set_model(next);

    let after: Vec<Position> = world.cells().map(|c| *c.position().unwrap()).collect();
    assert_eq!(before, after);
    assert!(world.cells().all(|c| c.model() == next));
    assert_eq!(ids(&world.agents_at(&[1, 2])), ["a"]);
}
