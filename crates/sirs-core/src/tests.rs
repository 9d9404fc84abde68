//! Unit tests for sirs-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_is_zero_based() {
        assert_eq!(AgentId(1).index(), 0);
        assert_eq!(AgentId(10).index(), 9);
        assert_eq!(AgentId::from_index(0), AgentId(1));
        assert_eq!(AgentId::from_index(9), AgentId(10));
    }

    #[test]
    fn ordering() {
        assert!(AgentId(1) < AgentId(2));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }

    #[test]
    fn converts_to_raw_u32() {
        assert_eq!(u32::from(AgentId(7)), 7);
        assert_eq!(u32::from(AgentId::from_index(0)), 1);
    }
}

#[cfg(test)]
mod params {
    use crate::params::RangeError;
    use crate::{PositiveNumber, Probability};

    #[test]
    fn probability_accepts_unit_interval() {
        assert_eq!(Probability::new(0.5).unwrap().get(), 0.5);
        assert_eq!(Probability::new(0.0).unwrap().get(), 0.0);
        assert_eq!(Probability::new(1.0).unwrap().get(), 1.0);
    }

    #[test]
    fn probability_rejects_out_of_range() {
        assert_eq!(
            Probability::new(-0.5),
            Err(RangeError::NotAProbability(-0.5))
        );
        assert_eq!(Probability::new(1.5), Err(RangeError::NotAProbability(1.5)));
    }

    #[test]
    fn probability_rejects_nan() {
        assert!(matches!(
            Probability::new(f64::NAN),
            Err(RangeError::NotFinite(_))
        ));
    }

    #[test]
    fn positive_number_accepts_integers_and_reals() {
        assert_eq!(PositiveNumber::new(5.0).unwrap().get(), 5.0);
        assert_eq!(PositiveNumber::new(0.25).unwrap().get(), 0.25);
        assert_eq!(PositiveNumber::new(0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn positive_number_rejects_negative() {
        assert_eq!(PositiveNumber::new(-5.0), Err(RangeError::Negative(-5.0)));
    }

    #[test]
    fn nonzero_rejects_zero() {
        assert_eq!(
            PositiveNumber::new_nonzero(0.0),
            Err(RangeError::NotPositive(0.0))
        );
        assert!(PositiveNumber::new_nonzero(100.0).is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0.0f64..1.0), r2.gen_range(0.0f64..1.0));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.gen_range(0..u64::MAX);
        let b: u64 = r2.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn standard_normal_is_roughly_centred() {
        let mut rng = SimRng::new(7);
        let n = 10_000;
        let mean: f64 = (0..n).map(|_| rng.standard_normal()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.1, "sample mean {mean} too far from 0");
    }
}

#[cfg(test)]
mod settings {
    use std::path::PathBuf;

    use crate::settings::test_settings;
    use crate::{RawSettings, Settings};

    fn raw() -> RawSettings {
        RawSettings {
            n: 10,
            total_time: 50,
            initial_infection_probability: 0.1,
            side_length: 100.0,
            contact_radius: 10.0,
            mean_speed: 1.0,
            std_speed: 0.1,
            infection_probability: 0.2,
            recovery_probability: 0.05,
            immunity_loss_probability: 0.01,
            record: false,
            record_file: PathBuf::from("states.csv"),
            seed: 42,
        }
    }

    #[test]
    fn valid_settings_pass() {
        let s = Settings::validate(raw()).unwrap();
        assert_eq!(s.n, 10);
        assert_eq!(s.total_time, 50);
        assert_eq!(s.infection_probability.get(), 0.2);
        assert_eq!(s.side_length.get(), 100.0);
    }

    #[test]
    fn bad_probability_names_the_field() {
        let mut r = raw();
        r.recovery_probability = 1.5;
        let err = Settings::validate(r).unwrap_err();
        assert_eq!(err.field, "recovery_probability");
    }

    #[test]
    fn negative_quantity_names_the_field() {
        let mut r = raw();
        r.contact_radius = -1.0;
        let err = Settings::validate(r).unwrap_err();
        assert_eq!(err.field, "contact_radius");
    }

    #[test]
    fn zero_side_length_rejected() {
        let mut r = raw();
        r.side_length = 0.0;
        let err = Settings::validate(r).unwrap_err();
        assert_eq!(err.field, "side_length");
    }

    #[test]
    fn json_file_keys_deserialize() {
        let json = r#"{
            "n": 10,
            "total_time": 50,
            "initial_infection_probability": 0.1,
            "side_length": 100.0,
            "contact_radius": 10.0,
            "mean_speed": 1.0,
            "std_speed": 0.1,
            "infection_probability": 0.2,
            "recovery_probability": 0.05,
            "immunity_loss_probability": 0.01,
            "record": true,
            "record_file": "out.csv"
        }"#;
        let raw: RawSettings = serde_json::from_str(json).unwrap();
        assert!(raw.record);
        assert_eq!(raw.seed, 42); // default
        let s = Settings::validate(raw).unwrap();
        assert_eq!(s.record_file, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_settings_helper_validates() {
        let s = test_settings(5, 10, 0.5, 50.0, 5.0, 1.0, 0.0, 0.3, 0.1, 0.05, 1);
        assert_eq!(s.n, 5);
        assert!(!s.record);
    }
}
