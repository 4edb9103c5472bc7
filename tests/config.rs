#[cfg(test)]
mod tests {
    use cams::libs::config::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.db_path.is_none());
        assert!(config.default_semester.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.db_path, None);
        assert_eq!(config.default_semester, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            db_path: Some(PathBuf::from("/tmp/college.db")),
            default_semester: Some("Fall 2026".to_string()),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.db_path, Some(PathBuf::from("/tmp/college.db")));
        assert_eq!(loaded.default_semester, Some("Fall 2026".to_string()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            db_path: None,
            default_semester: Some("Spring 2027".to_string()),
        };
        config.save().unwrap();
        assert!(Config::read().unwrap().default_semester.is_some());

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap().default_semester, None);

        // Deleting again is a no-op.
        Config::delete().unwrap();
    }
}
