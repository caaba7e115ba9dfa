//! Unit tests for the headless command line.

#[cfg(test)]
mod cli {
    use std::time::Duration;

    use clap::Parser;

    use bv_scenario::ScenarioConfig;

    use crate::cli::Args;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["headless"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn file_config() -> ScenarioConfig {
        ScenarioConfig {
            seed:            7,
            random_lights:   2,
            random_vehicles: 10,
            add_light:       vec!["5 5 1".into()],
            add_vehicle:     vec!["1 1 0 1 follower".into()],
            ..ScenarioConfig::default()
        }
    }

    #[test]
    fn command_line_records_come_first() {
        let a = args(&[
            "--add-light", "0 0 3",
            "--add-vehicle", "0 5 0 1 master_ccw",
            "--add-vehicle", "0 6 0 1 master_cw",
        ]);
        let merged = a.merge(file_config());
        assert_eq!(merged.add_light, vec!["0 0 3", "5 5 1"]);
        assert_eq!(
            merged.add_vehicle,
            vec!["0 5 0 1 master_ccw", "0 6 0 1 master_cw", "1 1 0 1 follower"],
        );
    }

    #[test]
    fn command_line_counts_and_seed_replace_file() {
        let merged = args(&["--random-vehicles", "3", "--seed", "99"]).merge(file_config());
        assert_eq!(merged.random_vehicles, 3);
        assert_eq!(merged.seed, 99);
        assert_eq!(merged.random_lights, 2);
    }

    #[test]
    fn no_overrides_keeps_file() {
        assert_eq!(args(&[]).merge(file_config()), file_config());
    }

    #[test]
    fn run_length_accepts_finite_seconds() {
        assert_eq!(args(&[]).run_length().unwrap(), Duration::from_secs(10));
        assert_eq!(args(&["--seconds", "0.25"]).run_length().unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn run_length_rejects_infinite_or_negative_seconds() {
        assert!(args(&["--seconds", "inf"]).run_length().is_err());
        assert!(args(&["--seconds", "NaN"]).run_length().is_err());
        assert!(args(&["--seconds=-1"]).run_length().is_err());
    }

    #[test]
    fn search_mode_flag() {
        assert_eq!(args(&[]).search(), bv_sim::NeighborSearch::Indexed);
        assert_eq!(args(&["--linear-search"]).search(), bv_sim::NeighborSearch::Linear);
    }
}
