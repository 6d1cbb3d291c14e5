use battleship_abilities::{
    Ability, AbilityPlacement, Orientation, Outcome, Phase, PlacementError, Report, Scenario,
    ShipPlacement, ShipType, Simulation, SHIP, STANDARD_SHIPS,
};

const EXPECTED_DISPLAY: [[u8; 10]; 10] = [
    [3, 5, 5, 5, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 5, 0, 0, 0, 0, 0],
    [0, 0, 3, 0, 5, 3, 3, 0, 0, 0],
    [0, 0, 0, 0, 5, 0, 0, 0, 0, 0],
    [0, 0, 5, 5, 5, 5, 5, 0, 0, 0],
    [0, 0, 0, 0, 5, 0, 5, 3, 0, 0],
    [0, 0, 0, 0, 5, 5, 5, 5, 0, 3],
    [0, 0, 0, 0, 5, 5, 5, 5, 5, 0],
    [0, 0, 0, 0, 0, 5, 5, 5, 0, 0],
    [0, 0, 0, 0, 0, 0, 5, 0, 0, 0],
];

fn run_standard() -> Outcome {
    Simulation::new(Scenario::standard()).run().unwrap()
}

#[test]
fn test_standard_ships_occupy_twelve_cells() {
    let outcome = run_standard();
    let ships: Vec<_> = outcome.board.ship_map().iter_set_bits().collect();
    assert_eq!(
        ships,
        vec![
            (0, 0),
            (1, 1),
            (2, 2),
            (2, 4),
            (2, 5),
            (2, 6),
            (5, 7),
            (6, 7),
            (6, 9),
            (7, 7),
            (7, 8),
            (8, 7),
        ]
    );
    assert_eq!(outcome.board.ship_count(), 4);
    assert!(outcome.ships.iter().all(Option::is_some));
}

#[test]
fn test_standard_display_grid() {
    let outcome = run_standard();
    assert_eq!(outcome.display.cells(), &EXPECTED_DISPLAY);
    assert_eq!(outcome.mask.affected().count_ones(), 30);
    // the diagonal ship survives at (0,0) and (2,2), the cone covers (1,1)
    assert_eq!(outcome.board.values()[1][1], SHIP);
    assert_eq!(outcome.display.get(1, 1), Some(5));
}

#[test]
fn test_patterns_follow_scenario_order() {
    let outcome = run_standard();
    let abilities: Vec<_> = outcome.patterns.iter().map(|(a, _)| *a).collect();
    assert_eq!(abilities, vec![Ability::Cone, Ability::Cross, Ability::Diamond]);
    assert_eq!(outcome.patterns[2].1.count_active(), 13);
}

#[test]
fn test_phases() {
    let mut sim = Simulation::new(Scenario::default());
    assert_eq!(sim.phase(), Phase::Init);
    sim.run().unwrap();
    assert_eq!(sim.phase(), Phase::Render);
    sim.finish();
    assert_eq!(sim.phase(), Phase::Done);
}

#[test]
fn test_out_of_bounds_stops_run() {
    let mut scenario = Scenario::standard();
    scenario.ships[0] = ShipPlacement::new(
        ShipType::new("Horizontal", 3),
        2,
        8,
        Orientation::Horizontal,
    );
    let mut sim = Simulation::new(scenario);
    let err = sim.run().unwrap_err();
    assert_eq!(
        err,
        PlacementError::OutOfBounds { ship: "Horizontal", row: 2, col: 8 }
    );
    assert_eq!(sim.phase(), Phase::Failed);
}

#[test]
fn test_vertical_overlap_against_earlier_ship() {
    let mut scenario = Scenario::standard();
    // runs down column 5 through the horizontal ship at (2, 5)
    scenario.ships[1] =
        ShipPlacement::new(ShipType::new("Vertical", 3), 1, 5, Orientation::Vertical);
    let err = Simulation::new(scenario).run().unwrap_err();
    assert_eq!(
        err,
        PlacementError::Overlap { ship: "Vertical", row: 2, col: 5 }
    );
}

#[test]
fn test_anti_diagonal_overlap_reported() {
    let mut scenario = Scenario::standard();
    scenario.ships[3] = ShipPlacement::new(
        ShipType::new("Diagonal ↙", 3),
        0,
        2,
        Orientation::DiagonalDownLeft,
    );
    let err = Simulation::new(scenario).run().unwrap_err();
    assert_eq!(
        err,
        PlacementError::Overlap { ship: "Diagonal ↙", row: 1, col: 1 }
    );
}

#[test]
fn test_custom_ability_origins() {
    let mut scenario = Scenario::standard();
    scenario.abilities = [
        AbilityPlacement::new(Ability::Cross, 0, 0),
        AbilityPlacement::new(Ability::Cross, 0, 0),
        AbilityPlacement::new(Ability::Diamond, -10, -10),
    ];
    let outcome = Simulation::new(scenario).run().unwrap();
    // clipped cross at the corner: center, two right, two down
    assert_eq!(outcome.mask.affected().count_ones(), 5);
    assert_eq!(outcome.display.get(0, 0), Some(5));
    assert_eq!(outcome.display.get(2, 2), Some(SHIP));
}

#[test]
fn test_standard_ship_table() {
    let orientations: Vec<_> = STANDARD_SHIPS.iter().map(|p| p.orientation).collect();
    assert_eq!(
        orientations,
        vec![
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::DiagonalDownRight,
            Orientation::DiagonalDownLeft,
        ]
    );
    assert!(STANDARD_SHIPS.iter().all(|p| p.ship_type.length() == 3));
}

#[test]
fn test_report_layout() {
    let outcome = run_standard();
    let report = Report::new(&outcome).to_string();
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(lines[0], "===== FINAL BOARD (0=water, 3=ship, 5=effect) =====");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "3 5 5 5 0 0 0 0 0 0");
    assert_eq!(lines[11], "0 0 0 0 0 0 5 0 0 0");
    assert_eq!(lines[13], "CONE PATTERN (1 = affected):");
    assert_eq!(lines[14], "0 0 1 0 0");
    assert_eq!(lines[20], "CROSS PATTERN (1 = affected):");
    assert_eq!(lines[27], "DIAMOND PATTERN (1 = affected):");
    assert_eq!(lines[32], "0 0 1 0 0");
    assert_eq!(lines.len(), 33);
}
