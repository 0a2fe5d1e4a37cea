use pretty_assertions::assert_eq;

use super::*;

fn sprint_z(ticks: i32, rotation: f32) -> f64 {
    let mut player = Player::default();
    player.sprint(ticks, Some(rotation));
    player.position.y
}

#[test]
fn found_angle_stays_inside() {
    let strategy = StratFinder::new(1.6).find().unwrap();
    assert!(strategy.final_z.abs() < 1.6);
    assert!(strategy.rotation < 0.0);
    assert_eq!(sprint_z(strategy.ticks, strategy.rotation), strategy.final_z);
    // one tick fewer straight ahead does not pass the bound
    assert!(sprint_z(strategy.ticks - 1, 0.0).abs() <= 1.6);
    assert!(sprint_z(strategy.ticks, 0.0).abs() > 1.6);
}

#[test]
fn previous_index_leaves_the_bound() {
    let finder = StratFinder {
        left: false,
        ..StratFinder::new(2.5)
    };
    let strategy = finder.find().unwrap();
    assert!(strategy.rotation > 0.0);
    if strategy.adjustments > 0 {
        let previous = index_to_degrees(strategy.angle_index - 1);
        assert!(sprint_z(strategy.ticks, previous).abs() >= 2.5);
    }
}

#[test]
fn rejects_bad_sizes() {
    assert_eq!(
        StratFinder::new(-1.0).find(),
        Err(StratError::InvalidSize(-1.0))
    );
    assert!(matches!(
        StratFinder::new(f64::NAN).find(),
        Err(StratError::InvalidSize(_))
    ));
}

#[test]
fn gives_up_past_max_ticks() {
    let finder = StratFinder {
        max_ticks: 3,
        ..StratFinder::new(50.0)
    };
    assert_eq!(
        finder.find(),
        Err(StratError::OutOfReach {
            size_z: 50.0,
            max_ticks: 3
        })
    );
}

#[test]
fn index_conversion() {
    assert_eq!(index_to_degrees(16384), 90.0);
    assert_eq!(index_to_degrees(-8192), -45.0);
}
