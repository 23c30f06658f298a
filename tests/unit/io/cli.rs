//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tomotile::TilingError;
    use tomotile::io::cli::{Cli, Command, CommandRunner};
    use tomotile::training::checkpoint::SelectionTarget;

    fn run(args: &[&str]) -> tomotile::Result<String> {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        CommandRunner::new(cli).run_with_output(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn plan_lines(extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            "tomotile",
            "plan",
            "--set",
            "volume_shape=[10, 12, 7]",
            "--set",
            "patch_size=[4, 6, 7]",
        ];
        args.extend_from_slice(extra);
        run(&args)
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    // Tests parsing with only the subcommand
    // Verified by changing default flag values
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["tomotile", "plan"]);

        assert_eq!(cli.config, None);
        assert!(cli.overrides.is_empty());
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Command::Plan {
                list: false,
                shuffle: false
            }
        );
    }

    // Tests global options are accepted after the subcommand
    // Verified by removing the global marker from --set
    #[test]
    fn test_cli_global_args() {
        let cli = Cli::parse_from([
            "tomotile",
            "select",
            "--manifest",
            "ckpts.json",
            "--target",
            "val-loss",
            "-s",
            "seed=3",
            "--config",
            "run.yaml",
            "-v",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("run.yaml")));
        assert_eq!(cli.overrides, vec!["seed=3".to_string()]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Select {
                manifest: PathBuf::from("ckpts.json"),
                target: Some(SelectionTarget::ValLoss),
            }
        );
    }

    // Tests the plan report lists starts, overlap and the patch count
    // Verified by printing the z starts for every axis
    #[test]
    fn test_plan_report() {
        let lines = plan_lines(&[]);

        assert_eq!(
            lines,
            vec![
                "volume shape: 10x12x7",
                "patch size: 4x6x7",
                "x starts: [0, 3, 6] (overlap 1.00)",
                "y starts: [0, 6] (overlap 0.00)",
                "z starts: [0] (overlap 0.00)",
                "patches per volume: 6",
            ]
        );
    }

    // Tests shuffled listings are seeded permutations of the plain listing
    // Verified by seeding the shuffle from entropy
    #[test]
    fn test_plan_shuffle_is_reproducible() {
        let listed = plan_lines(&["--list"]);
        let shuffled = plan_lines(&["--shuffle"]);
        let again = plan_lines(&["--shuffle"]);

        assert_eq!(listed.len(), 6 + 6);
        assert_eq!(listed.get(6).map(String::as_str), Some("0 0 0"));
        assert_eq!(shuffled, again);

        let mut sorted_listed = listed;
        let mut sorted_shuffled = shuffled;
        sorted_listed.sort();
        sorted_shuffled.sort();
        assert_eq!(sorted_listed, sorted_shuffled);
    }

    // Tests an oversized patch is reported as an error
    // Verified by clamping the patch size
    #[test]
    fn test_plan_rejects_oversized_patch() {
        let result = run(&[
            "tomotile",
            "plan",
            "--set",
            "volume_shape=[8, 8, 8]",
            "--set",
            "patch_size=[9, 8, 8]",
        ]);
        assert!(matches!(result, Err(TilingError::InvalidParameter { .. })));
    }

    // Tests select prints the best checkpoint path for the chosen target
    // Verified by ignoring the --target flag
    #[test]
    fn test_select_command() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("ckpts.json");
        std::fs::write(
            &manifest,
            r#"[
                {"path": "a.ckpt", "val_dice_mean": 0.8, "val_loss": 0.5},
                {"path": "b.ckpt", "val_dice_mean": 0.7, "val_loss": 0.2}
            ]"#,
        )
        .unwrap();
        let manifest_arg = manifest.to_string_lossy().into_owned();

        let by_dice = run(&["tomotile", "select", "--manifest", &manifest_arg]).unwrap();
        let by_loss = run(&[
            "tomotile",
            "select",
            "--manifest",
            &manifest_arg,
            "--target",
            "val-loss",
        ])
        .unwrap();

        assert_eq!(by_dice, "a.ckpt\n");
        assert_eq!(by_loss, "b.ckpt\n");
    }

    // Tests write-copick writes to the given path
    // Verified by always writing to the configured default
    #[test]
    fn test_write_copick_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copick.config");
        let path_arg = path.to_string_lossy().into_owned();

        let output = run(&["tomotile", "write-copick", &path_arg]).unwrap();

        assert!(path.is_file());
        assert_eq!(output.trim_end(), path_arg);
    }

    // Tests an explicit config file must exist
    // Verified by falling back to defaults for a missing --config
    #[test]
    fn test_missing_explicit_config() {
        let result = run(&["tomotile", "--config", "/nonexistent/tomotile.yaml", "plan"]);
        assert!(matches!(result, Err(TilingError::FileSystem { .. })));
    }
}
