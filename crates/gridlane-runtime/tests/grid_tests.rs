//! Whole-grid behaviour: movement, collisions, revival and the light.

use gridlane_runtime::prelude::*;

fn grid(rows: &[&str], light: LightConfig) -> Grid {
    let map = TerrainMap::parse(rows).unwrap();
    Grid::new(map, LightCycle::new(light).unwrap(), Some(7))
}

fn moves_of(events: &[GridEvent]) -> Vec<GridPoint> {
    events
        .iter()
        .filter_map(|e| match e {
            GridEvent::Moved { to, .. } => Some(*to),
            _ => None,
        })
        .collect()
}

#[test]
fn car_drives_to_the_dead_end_and_turns_back() {
    let mut g = grid(&["WWWWW", "WSSSW", "WWWWW"], LightConfig::default());
    g.spawn(Vehicle::car(1, 1, Direction::East)).unwrap();

    let path: Vec<GridPoint> = g.run(4).iter().flat_map(|events| moves_of(events)).collect();
    assert_eq!(
        path,
        vec![
            GridPoint::new(2, 1),
            GridPoint::new(3, 1),
            GridPoint::new(2, 1),
            GridPoint::new(1, 1),
        ]
    );
    assert_eq!(g.vehicles()[0].direction(), Direction::West);
}

#[test]
fn boxed_in_vehicle_is_blocked_not_moved() {
    let mut g = grid(&["S"], LightConfig::default());
    g.spawn(Vehicle::taxi(0, 0, Direction::North)).unwrap();
    let events = g.tick();
    assert!(matches!(
        events[0],
        GridEvent::Blocked { terrain: Terrain::Wall, direction: Direction::South, .. }
    ));
    assert_eq!(g.vehicles()[0].position(), GridPoint::new(0, 0));
    assert_eq!(g.stats().total_blocked, 1);
}

#[test]
fn shared_cell_kills_the_longer_reviver_and_it_comes_back() {
    let mut g = grid(&["S"], LightConfig::default());
    g.spawn(Vehicle::car(0, 0, Direction::North)).unwrap();
    let human = g.spawn(Vehicle::human(0, 0, Direction::North)).unwrap();

    let first = g.tick();
    assert!(first.contains(&GridEvent::Died {
        id: human,
        kind: VehicleKind::Human,
        at: GridPoint::new(0, 0),
    }));
    assert_eq!(g.alive_count(), 1);

    // Dead for 45 pokes, then revived on the next one.
    g.run(45);
    let human_now = g.vehicle(human).unwrap();
    assert!(!human_now.is_alive());
    assert_eq!(human_now.poke_count(), 45);

    let events = g.tick();
    assert!(events.iter().any(|e| matches!(e, GridEvent::Revived { id, .. } if *id == human)));
    // Still sharing the cell with the car, so it dies again straight away.
    assert!(events.iter().any(|e| matches!(e, GridEvent::Died { id, .. } if *id == human)));
    assert_eq!(g.stats().total_deaths, 2);
    assert_eq!(g.stats().total_revivals, 1);
}

#[test]
fn trucks_never_die_on_the_grid() {
    let mut g = grid(&["S"], LightConfig::default());
    g.spawn(Vehicle::truck(0, 0, Direction::North)).unwrap();
    for kind in [VehicleKind::Car, VehicleKind::Bicycle, VehicleKind::Atv] {
        g.spawn(Vehicle::new(kind, 0, 0, Direction::North)).unwrap();
    }
    g.run(20);
    assert!(g.vehicles()[0].is_alive());
}

#[test]
fn light_cycles_on_its_configured_schedule() {
    let light = LightConfig {
        green_ticks: 2,
        yellow_ticks: 1,
        red_ticks: 1,
    };
    let mut g = grid(&["S"], light);
    g.run(4);

    let changes: Vec<(Tick, Light)> = g
        .event_history()
        .iter()
        .filter_map(|(tick, e)| match e {
            GridEvent::LightChanged { light } => Some((*tick, *light)),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![(2, Light::Yellow), (3, Light::Red), (4, Light::Green)]);
}

#[test]
fn pedestrian_waits_for_the_crosswalk_to_open() {
    let light = LightConfig {
        green_ticks: 2,
        yellow_ticks: 3,
        red_ticks: 3,
    };
    let mut g = grid(&["GC"], light);
    g.spawn(Vehicle::human(0, 0, Direction::East)).unwrap();

    g.run(2);
    assert_eq!(g.vehicles()[0].position(), GridPoint::new(0, 0), "green holds the human back");
    assert_eq!(g.light(), Light::Yellow);

    g.tick();
    assert_eq!(g.vehicles()[0].position(), GridPoint::new(1, 0));
}

#[test]
fn nobody_ever_stands_on_a_wall() {
    let scenario = ScenarioConfig::sample();
    let mut g = scenario.build_grid().unwrap();
    for _ in 0..300 {
        g.tick();
        for v in g.vehicles() {
            assert_ne!(
                g.terrain_at(v.position()),
                Terrain::Wall,
                "{} walked into a wall at {}",
                v.kind(),
                v.position()
            );
        }
    }
}

#[test]
fn reset_replays_a_seeded_run() {
    let mut g = ScenarioConfig::sample().build_grid().unwrap();
    g.run(60);
    let first = g.snapshot();

    g.reset();
    assert_eq!(g.current_tick(), 0);
    assert_eq!(g.stats().total_moves, 0);
    g.run(60);
    assert_eq!(g.snapshot(), first);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut g = grid(&["S"], LightConfig::default());
    g.spawn(Vehicle::car(0, 0, Direction::North)).unwrap();
    g.spawn(Vehicle::bicycle(0, 0, Direction::North)).unwrap();
    g.tick();

    let json = serde_json::to_value(g.snapshot()).unwrap();
    assert_eq!(json["tick"], 1);
    assert_eq!(json["rows"][0], "S");
    assert_eq!(json["vehicles"][1]["image"], "bicycle_dead.gif");
    assert_eq!(json["vehicles"][0]["image"], "car.gif");
    assert_eq!(json["stats"]["dead"], 1);
}

#[test]
fn seeded_scenario_builds_identical_runs() {
    let scenario = ScenarioConfig::sample();
    let mut a = scenario.build_grid().unwrap();
    let mut b = scenario.build_grid().unwrap();
    a.run(20);
    b.run(20);

    let ja = serde_json::to_string(&a.snapshot()).unwrap();
    let jb = serde_json::to_string(&b.snapshot()).unwrap();
    assert_eq!(ja, jb, "same seed should give byte-identical snapshots");
}

#[test]
fn unseeded_scenario_gets_fresh_ids() {
    let mut scenario = ScenarioConfig::sample();
    scenario.simulation.seed = None;
    let a = scenario.build_grid().unwrap();
    let b = scenario.build_grid().unwrap();
    assert_ne!(a.vehicles()[0].id(), b.vehicles()[0].id());
}
