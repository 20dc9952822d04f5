#[cfg(test)]
mod tests {
    use std::fs;
    use tasktrack::libs::config::{Config, DEFAULT_CHECKPOINT_INTERVAL_SECS, DEFAULT_DATABASE_FILE};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.database_file, DEFAULT_DATABASE_FILE);
        assert_eq!(config.checkpoint_interval_secs, DEFAULT_CHECKPOINT_INTERVAL_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let mut config = Config::default();
        config.set_checkpoint_interval(15).unwrap();
        config.database_file = "work.db".to_string();

        config.save_to(&path).unwrap();

        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "checkpoint_interval_secs": 5 }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.checkpoint_interval_secs, 5);
        assert_eq!(config.database_file, DEFAULT_DATABASE_FILE);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_interval_is_rejected(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        assert!(config.set_checkpoint_interval(0).is_err());
        assert_eq!(config.checkpoint_interval_secs, DEFAULT_CHECKPOINT_INTERVAL_SECS);

        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "checkpoint_interval_secs": 0 }"#).unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_path_resolution(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        let relative = config.database_path().unwrap();
        assert!(relative.ends_with(DEFAULT_DATABASE_FILE));

        let absolute = ctx.temp_dir.path().join("elsewhere.db");
        config.database_file = absolute.display().to_string();
        assert_eq!(config.database_path().unwrap(), absolute);
    }
}
