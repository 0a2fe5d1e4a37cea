use pretty_assertions::assert_eq;

use super::*;

const EPSILON: f64 = 1e-12;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn grounded(duration: i32) -> MoveArgs {
    MoveArgs {
        duration,
        ..MoveArgs::new(MoveState::Grounded)
    }
}

mod reference_fixtures {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn one_walk_tick_from_rest() {
        let mut player = Player::default();
        player.travel(grounded(1));
        assert_eq!(player.velocity.x, 0.0);
        assert_close(player.velocity.y, 0.097_999_989_986_419_68);
        // position moves before velocity is updated
        assert_eq!(player.position, DVec2::ZERO);
    }

    #[test]
    fn five_walk_ticks() {
        let mut player = Player::default();
        player.travel(grounded(5));
        assert_close(player.velocity.y, 0.205_384_514_322_593_7);
        assert_close(player.position.y, 0.626_906_275_794_978_4);
        assert_eq!(player.position.x, 0.0);
    }

    #[test]
    fn sprint_tick() {
        let mut player = Player::default();
        player.travel(MoveArgs {
            sprinting: true,
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.127_399_966_120_719_9);
    }

    #[test]
    fn sneak_tick() {
        let mut player = Player::default();
        player.travel(MoveArgs {
            sneaking: true,
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.029_399_998_486_042_023);
    }
}

mod modifiers {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn water_forces_fluid_multiplier() {
        let mut player = Player::default();
        player.modifiers = Modifiers::WATER;
        player.travel(MoveArgs {
            sprinting: true,
            speed: Some(3),
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.019_600_000_232_458_115);
    }

    #[test]
    fn sneaking_in_lava_is_airborne() {
        let mut player = Player::default();
        player.modifiers = Modifiers::LAVA;
        player.travel(MoveArgs {
            sneaking: true,
            ..grounded(1)
        });
        assert_eq!(player.state, MoveState::Airborne);
    }

    #[test]
    fn ladder_clamps_each_axis() {
        let mut player = Player::default();
        player.modifiers = Modifiers::LADDER;
        player.travel(MoveArgs {
            sprinting: true,
            ..MoveArgs::new(MoveState::Jumping)
        });
        assert_eq!(player.velocity.y, 0.15);
        player.velocity = DVec2::new(-3.0, 3.0);
        player.travel(MoveArgs {
            inputs: Inputs::empty(),
            slipperiness: Some(1.0),
            ..MoveArgs::new(MoveState::Airborne)
        });
        assert_eq!(player.velocity, DVec2::new(-0.15, 0.15));
    }

    #[test]
    fn web_drops_inertia_on_the_next_tick() {
        let mut player = Player::default();
        player.modifiers = Modifiers::WEB;
        player.travel(grounded(1));
        let first = player.velocity.y;
        player.travel(grounded(1));
        assert_close(first, 0.097_999_989_986_419_68 * 0.25);
        assert_close(player.velocity.y, first);
    }

    #[test]
    fn soulsand_slows_before_drag() {
        let mut player = Player::default();
        player.modifiers = Modifiers::SOULSAND;
        player.travel(grounded(2));
        let walk = 0.097_999_989_986_419_68;
        assert_close(player.velocity.y, walk * 0.4 * 0.91 * f64::from(0.6_f32) + walk);
    }

    #[test]
    fn block_scales_input() {
        let mut player = Player::default();
        player.modifiers = Modifiers::BLOCK;
        player.travel(grounded(1));
        assert!((player.velocity.y - 0.098 * 0.2).abs() < 1e-6);
    }
}

mod effects {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn speed_raises_ground_acceleration() {
        let mut player = Player::default();
        player.travel(MoveArgs {
            speed: Some(2),
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.137_199_968_099_594_12);
    }

    /// Slowness scales by `1 - 0.15 * slow`. The reference engine read the
    /// speed level here, which made slowness a no-op.
    #[test]
    fn slowness_uses_slow_level() {
        let mut player = Player::default();
        player.travel(MoveArgs {
            slow: Some(2),
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.068_599_984_049_797_06);

        let mut crawling = Player::default();
        crawling.travel(MoveArgs {
            slow: Some(7),
            ..grounded(1)
        });
        assert_eq!(crawling.velocity.y, 0.0);
    }

    #[test]
    fn config_levels_are_defaults() {
        let mut player = Player::new(PlayerConfig {
            speed: 2,
            ..PlayerConfig::default()
        });
        player.travel(grounded(1));
        assert_close(player.velocity.y, 0.137_199_968_099_594_12);
    }
}

mod switches {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sneak_delay_uses_previous_tick() {
        let mut player = Player::new(PlayerConfig {
            sneak_delay: true,
            ..PlayerConfig::default()
        });
        player.travel(MoveArgs {
            sneaking: true,
            ..grounded(1)
        });
        assert_close(player.velocity.y, 0.097_999_989_986_419_68);
    }

    #[test]
    fn air_sprint_delay() {
        let air = MoveArgs {
            sprinting: true,
            slipperiness: Some(1.0),
            ..MoveArgs::new(MoveState::Airborne)
        };
        let mut delayed = Player::default();
        delayed.travel(air);
        assert!((delayed.velocity.y - 0.02 * 0.98).abs() < 1e-6);

        let mut immediate = Player::new(PlayerConfig {
            air_sprint_delay: false,
            ..PlayerConfig::default()
        });
        immediate.travel(air);
        assert!((immediate.velocity.y - 0.026 * 0.98).abs() < 1e-6);
    }

    #[test]
    fn reverse_walks_backwards() {
        let mut player = Player::new(PlayerConfig {
            reverse: true,
            ..PlayerConfig::default()
        });
        player.travel(grounded(1));
        assert_close(player.velocity.y, -0.097_999_989_986_419_68);
    }

    #[test]
    fn inertia_can_be_disabled() {
        let mut player = Player::default();
        player.velocity = DVec2::new(0.001, 0.0);
        player.travel(MoveArgs {
            inputs: Inputs::empty(),
            ..grounded(1)
        });
        assert_eq!(player.velocity.x, 0.0);

        player.config.inertia_axis = 0;
        player.velocity = DVec2::new(0.001, 0.0);
        player.travel(MoveArgs {
            inputs: Inputs::empty(),
            ..grounded(1)
        });
        assert!(player.velocity.x > 0.0);
    }

    #[test]
    fn inertia_threshold_is_single_precision() {
        // 0.005_f32 widens to 0.004_999_999_888...
        let drag = 0.91 * f64::from(0.6_f32);
        let mut player = Player::default();
        player.velocity = DVec2::new(0.004_999_999_8 / drag, 0.004_999_999_95 / drag);
        player.travel(MoveArgs {
            inputs: Inputs::empty(),
            ..grounded(1)
        });
        assert_eq!(player.velocity.x, 0.0);
        assert!((player.velocity.y - 0.004_999_999_95).abs() < 1e-15);
    }
}

mod rotation {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn facing_turns_acceleration() {
        let mut player = Player::default();
        player.rotation = 90.0;
        player.travel(grounded(1));
        assert_close(player.velocity.x, -0.097_999_989_986_419_68);
        assert!(player.velocity.y.abs() < 1e-9);
    }

    #[test]
    fn override_is_absolute_and_recorded() {
        let mut player = Player::default();
        player.rotation = 90.0;
        player.travel(MoveArgs {
            rotation: Some(30.0),
            ..grounded(2)
        });
        assert_eq!(player.rotation, 90.0);
        assert_eq!(player.last_rotation, 30.0);
        assert_eq!(player.last_turn, 0.0);
    }

    #[test]
    fn forty_five_offset_forces_strafe_mask() {
        let mut player = Player::default();
        player.travel(MoveArgs {
            rotation_offset: 45.0,
            inputs: Inputs::BACK,
            ..grounded(1)
        });
        assert!(player.velocity.x.abs() < 1e-9);
        assert_close(player.velocity.y, 0.099_999_979_138_374_33);
    }
}

#[test]
fn zero_duration_only_sets_state() {
    let mut player = Player::default();
    player.travel(MoveArgs {
        duration: 0,
        ..MoveArgs::new(MoveState::Airborne)
    });
    assert_eq!(player.state, MoveState::Airborne);
    assert_eq!(player.velocity, DVec2::ZERO);
}

#[test]
fn reset_keeps_or_drops_momentum() {
    let mut player = Player::default();
    player.travel(grounded(3));
    player.reset_position();
    assert_eq!(player.position, DVec2::ZERO);
    assert!(player.velocity.y > 0.0);
    player.reset();
    assert_eq!(player.velocity, DVec2::ZERO);
}
