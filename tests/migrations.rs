#[cfg(test)]
mod tests {
    use cams::db::db::Db;
    use cams::db::migrations::{get_db_version, needs_migration, record_counts, MigrationManager};
    use cams::db::rooms::Rooms;
    use cams::db::timeslots::TimeSlots;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_fully_migrated(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 4);
        assert!(!needs_migration(&db.conn).unwrap());

        for table in ["departments", "students", "teachers", "courses", "enrollments", "rooms", "timeslots", "class_schedules"] {
            let count: i64 = db
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_seed_rows_present(_ctx: &mut MigrationTestContext) {
        let slots = TimeSlots::new().unwrap().list().unwrap();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].to_string(), "08:00 - 09:30");
        assert_eq!(slots[4].to_string(), "15:45 - 17:15");

        let rooms = Rooms::new().unwrap().list().unwrap();
        assert_eq!(rooms.len(), 6);
        let numbers: Vec<&str> = rooms.iter().map(|r| r.room_number.as_str()).collect();
        for number in ["101", "102", "103", "201", "202", "203"] {
            assert!(numbers.contains(&number), "missing room {}", number);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(_ctx: &mut MigrationTestContext) {
        // Opening the database twice must not re-run or duplicate anything.
        drop(Db::new().unwrap());
        let db = Db::new().unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 4);
        let slot_count: i64 = db.conn.query_row("SELECT COUNT(*) FROM timeslots", [], |row| row.get(0)).unwrap();
        assert_eq!(slot_count, 5);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_recorded(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let manager = MigrationManager::new();
        let history = manager.get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_core_tables");
        assert_eq!(history[3].1, "add_class_schedules");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_record_counts_cover_every_table(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let counts = record_counts(&db.conn).unwrap();
        let names: Vec<&str> = counts.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["departments", "students", "teachers", "courses", "enrollments", "rooms", "timeslots", "class_schedules"]
        );

        let rows_of = |table: &str| counts.iter().find(|(name, _)| name == table).unwrap().1;
        assert_eq!(rows_of("rooms"), 6);
        assert_eq!(rows_of("timeslots"), 5);
        assert_eq!(rows_of("students"), 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_removes_tracking_rows(_ctx: &mut MigrationTestContext) {
        let mut db = Db::new().unwrap();
        let manager = MigrationManager::new();

        assert!(manager.is_migration_applied(&db.conn, 4).unwrap());

        manager.rollback_to(&mut db.conn, 2).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(!manager.is_migration_applied(&db.conn, 3).unwrap());
        assert!(needs_migration(&db.conn).unwrap());

        // Rolling back to the current or a newer version is a no-op.
        manager.rollback_to(&mut db.conn, 2).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
    }
}
