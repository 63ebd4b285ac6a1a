//! Unit tests for ts-core.

mod angle {
    use std::f32::consts::PI;

    use glam::Vec2;

    use crate::{heading_of, heading_vec, wrap_angle};

    #[test]
    fn wrap_stays_in_half_open_interval() {
        for raw in [-10.0_f32, -PI, -PI / 2.0, 0.0, PI / 2.0, PI, 10.0, 7.0 * PI] {
            let a = wrap_angle(raw);
            assert!(a > -PI && a <= PI, "wrap_angle({raw}) = {a} out of range");
        }
    }

    #[test]
    fn wrap_is_idempotent() {
        for raw in [-2.5_f32, 0.3, 3.0] {
            let once = wrap_angle(raw);
            assert!((wrap_angle(once) - once).abs() < 1e-6);
        }
    }

    #[test]
    fn pi_maps_to_pi_not_minus_pi() {
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn heading_round_trip() {
        for h in [-2.0_f32, -0.5, 0.0, 1.0, 3.0] {
            let v = heading_vec(h);
            assert!((heading_of(v) - wrap_angle(h)).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_vector_heading_is_zero() {
        assert_eq!(heading_of(Vec2::ZERO), 0.0);
    }
}

mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        for _ in 0..16 {
            let (x, y): (f32, f32) = (a.gen_range(0.0..1.0), b.gen_range(0.0..1.0));
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_agents_different_streams() {
        let mut a = AgentRng::new(7, AgentId(0));
        let mut b = AgentRng::new(7, AgentId(1));
        let xs: Vec<f32> = (0..8).map(|_| a.gen_range(0.0..1.0)).collect();
        let ys: Vec<f32> = (0..8).map(|_| b.gen_range(0.0..1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_on_empty_slice_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

mod clock {
    use crate::{SimClock, Tick};

    #[test]
    fn advance_accumulates_dt() {
        let mut clock = SimClock::new(0.05);
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(10));
        assert!((clock.elapsed_secs() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tick_offset() {
        assert_eq!(Tick(5).offset(3), Tick(8));
    }
}

mod params {
    use crate::{SimParams, VehicleParams};

    #[test]
    fn driver_defaults_match_tuning() {
        let p = VehicleParams::driver();
        assert_eq!(p.accel, 2.0);
        assert_eq!(p.max_speed, 10.0);
        assert_eq!(p.waypoint_tolerance, 64.0);
    }

    #[test]
    fn mmv_brakes_harder_than_it_accelerates() {
        let p = VehicleParams::mmv();
        assert!(p.brake > p.accel);
    }

    #[test]
    fn default_dt_is_one_frame() {
        assert_eq!(SimParams::default().dt_secs, 0.05);
    }
}
