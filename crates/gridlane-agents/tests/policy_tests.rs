//! Direction choice and passability scenarios.

use gridlane_agents::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn car_turns_left_past_a_wall_on_red() {
    let car = Vehicle::car(5, 5, Direction::North);
    let view = NeighborView::new(Terrain::Wall, Terrain::Crosswalk, Terrain::Street, Terrain::Street);

    assert!(!car.can_pass(view.north, Light::Red));
    assert!(!car.can_pass(view.east, Light::Red));
    assert!(car.can_pass(view.west, Light::Red));

    let d = car.choose_direction(&view, Light::Red, &mut ScriptedChoice::default());
    assert_eq!(d, Direction::West);
}

#[test]
fn bicycle_prefers_trail_to_the_right_over_street_ahead() {
    let bike = Vehicle::bicycle(0, 0, Direction::North);
    let view = NeighborView::new(Terrain::Street, Terrain::Trail, Terrain::Street, Terrain::Grass);
    let d = bike.choose_direction(&view, Light::Green, &mut ScriptedChoice::default());
    assert_eq!(d, Direction::East);
}

#[test]
fn atv_facing_a_wall_spreads_evenly_over_its_arc() {
    let atv = Vehicle::atv(0, 0, Direction::North);
    let view = NeighborView::uniform(Terrain::Grass).with(Direction::North, Terrain::Wall);
    let mut rng = SmallRng::seed_from_u64(2024);

    let trials = 6000;
    let mut counts: HashMap<Direction, usize> = HashMap::new();
    for _ in 0..trials {
        let d = atv.choose_direction(&view, Light::Green, &mut rng);
        *counts.entry(d).or_insert(0) += 1;
    }

    assert_eq!(counts.get(&Direction::South), None, "never reverses");
    for d in [Direction::North, Direction::West, Direction::East] {
        let share = counts.get(&d).copied().unwrap_or(0) as f64 / trials as f64;
        assert!(
            (share - 1.0 / 3.0).abs() < 0.05,
            "{d} drawn {:.3} of the time, expected about 1/3",
            share
        );
    }
}

#[test]
fn atv_in_the_open_keeps_its_heading() {
    let atv = Vehicle::atv(0, 0, Direction::East);
    let view = NeighborView::uniform(Terrain::Trail);
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        assert_eq!(atv.choose_direction(&view, Light::Red, &mut rng), Direction::East);
    }
}

#[test]
fn pedestrian_waits_out_a_green_crosswalk() {
    let human = Vehicle::human(0, 0, Direction::North);
    let view = NeighborView::new(Terrain::Grass, Terrain::Wall, Terrain::Street, Terrain::Crosswalk);

    assert!(human.can_pass(view.north, Light::Green));
    assert!(!human.can_pass(view.west, Light::Green));
    assert!(!human.can_pass(view.east, Light::Green));

    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        assert_eq!(human.choose_direction(&view, Light::Green, &mut rng), Direction::North);
    }
}

#[test]
fn truck_never_picks_an_ineligible_cell() {
    let truck = Vehicle::truck(0, 0, Direction::South);
    // facing south: left is east, right is west
    let view = NeighborView::new(Terrain::Street, Terrain::Light, Terrain::Grass, Terrain::Crosswalk);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let d = truck.choose_direction(&view, Light::Red, &mut rng);
        assert!(matches!(d, Direction::East | Direction::West), "picked {d}");
        if !seen.contains(&d) {
            seen.push(d);
        }
    }
    assert_eq!(seen.len(), 2, "both eligible cells get drawn");
}

#[test]
fn choices_stay_in_the_forward_arc_or_reverse() {
    let mut rng = SmallRng::seed_from_u64(77);
    let terrains = Terrain::ALL;
    for kind in VehicleKind::ALL {
        for facing in Direction::ALL {
            for i in 0..terrains.len().pow(3) {
                let front = terrains[i % 6];
                let left = terrains[(i / 6) % 6];
                let right = terrains[(i / 36) % 6];
                let view = NeighborView::uniform(Terrain::Street)
                    .with(facing, front)
                    .with(facing.left(), left)
                    .with(facing.right(), right)
                    .with(facing.reverse(), Terrain::Wall);
                let v = Vehicle::new(kind, 0, 0, facing);
                let d = v.choose_direction(&view, Light::Yellow, &mut rng);
                if d == facing.reverse() {
                    assert!(
                        [front, left, right].iter().all(|&t| !eligible_for_choice(kind, t, Light::Yellow)),
                        "{kind} reversed with an eligible cell ahead"
                    );
                }
            }
        }
    }
}

fn eligible_for_choice(kind: VehicleKind, terrain: Terrain, light: Light) -> bool {
    match kind {
        VehicleKind::Car | VehicleKind::Taxi | VehicleKind::Truck => {
            matches!(terrain, Terrain::Street | Terrain::Crosswalk | Terrain::Light)
        }
        VehicleKind::Bicycle => matches!(
            terrain,
            Terrain::Trail | Terrain::Street | Terrain::Light | Terrain::Crosswalk
        ),
        VehicleKind::Human => {
            terrain == Terrain::Grass || (terrain == Terrain::Crosswalk && light != Light::Green)
        }
        // ATVs never reverse.
        VehicleKind::Atv => true,
    }
}
