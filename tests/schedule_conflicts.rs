#[cfg(test)]
mod tests {
    use cams::db::courses::{Course, Courses};
    use cams::db::db::Db;
    use cams::db::departments::{Department, Departments};
    use cams::db::rooms::Rooms;
    use cams::db::schedules::Schedules;
    use cams::db::teachers::{Teacher, Teachers};
    use cams::db::timeslots::TimeSlots;
    use cams::libs::schedule::{Assignment, ClassSchedule, Conflict};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ScheduleTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ScheduleTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ScheduleTestContext { _temp_dir: temp_dir }
        }
    }

    /// Creates a department, two teachers and two courses, and returns
    /// `(course_ids, teacher_ids)` alongside the seeded room and slot ids.
    fn seed_records(tag: &str) -> (Vec<i64>, Vec<i64>, Vec<i64>, Vec<i64>) {
        let mut departments = Departments::new().unwrap();
        let dept_id = departments.create(&Department::new(format!("Dept {}", tag))).unwrap();

        let mut teachers = Teachers::new().unwrap();
        let t1 = teachers
            .create(&Teacher::new(format!("Teacher A {}", tag), format!("a.{}@college.edu", tag)))
            .unwrap();
        let t2 = teachers
            .create(&Teacher::new(format!("Teacher B {}", tag), format!("b.{}@college.edu", tag)))
            .unwrap();

        let mut courses = Courses::new().unwrap();
        let c1 = courses
            .create(&Course::new(format!("Course A {}", tag), "3".to_string(), Some(dept_id)))
            .unwrap();
        let c2 = courses
            .create(&Course::new(format!("Course B {}", tag), "4".to_string(), Some(dept_id)))
            .unwrap();

        let rooms: Vec<i64> = Rooms::new().unwrap().list().unwrap().iter().map(|r| r.id.unwrap()).collect();
        let slots: Vec<i64> = TimeSlots::new().unwrap().list().unwrap().iter().map(|s| s.id.unwrap()).collect();

        (vec![c1, c2], vec![t1, t2], rooms, slots)
    }

    fn conflict_of(error: anyhow::Error) -> Conflict {
        *error.downcast_ref::<Conflict>().expect("expected a scheduling conflict")
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_insert_free_assignment(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("free");
        let mut schedules = Schedules::new().unwrap();

        let id = schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[0], rooms[0]))
            .unwrap();
        assert!(id > 0);

        let stored = schedules.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.course_id, courses[0]);
        assert_eq!(stored.room_id, rooms[0]);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_room_conflict_on_insert(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("room");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[1], rooms[1]))
            .unwrap();

        // Different teacher and course, but the same room at the same time.
        let err = schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[1], slots[1], rooms[1]))
            .unwrap_err();
        assert_eq!(conflict_of(err), Conflict::Room);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_teacher_conflict_on_insert(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("teacher");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[2], rooms[0]))
            .unwrap();

        // Same teacher at the same time in a different room.
        let err = schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[0], slots[2], rooms[1]))
            .unwrap_err();
        assert_eq!(conflict_of(err), Conflict::Teacher);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_room_conflict_reported_before_teacher(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("both");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[3], rooms[2]))
            .unwrap();

        // Same room and same teacher at the same time: only the room
        // conflict is reported.
        let err = schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[0], slots[3], rooms[2]))
            .unwrap_err();
        assert_eq!(conflict_of(err), Conflict::Room);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_same_room_different_slot_is_fine(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("aside");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[0], rooms[3]))
            .unwrap();
        schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[0], slots[1], rooms[3]))
            .unwrap();

        assert_eq!(schedules.list().unwrap().len(), 2);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_update_does_not_conflict_with_itself(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("self");
        let mut schedules = Schedules::new().unwrap();

        let id = schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[4], rooms[4]))
            .unwrap();

        // Re-saving with the same room and slot must not trip either rule.
        let mut schedule = schedules.get_by_id(id).unwrap().unwrap();
        schedule.course_id = courses[1];
        schedules.update_checked(id, &schedule).unwrap();

        let updated = schedules.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.course_id, courses[1]);
        assert_eq!(updated.room_id, rooms[4]);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_update_into_occupied_room_is_rejected(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("move");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[0], rooms[5]))
            .unwrap();
        let id = schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[1], slots[1], rooms[5]))
            .unwrap();

        // Moving the second class onto the first one's slot clashes on the room.
        let mut schedule = schedules.get_by_id(id).unwrap().unwrap();
        schedule.timeslot_id = slots[0];
        let err = schedules.update_checked(id, &schedule).unwrap_err();
        assert_eq!(conflict_of(err), Conflict::Room);

        // The rejected update left the record untouched.
        let unchanged = schedules.get_by_id(id).unwrap().unwrap();
        assert_eq!(unchanged.timeslot_id, slots[1]);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_check_is_advisory_only(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("advisory");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[2], rooms[2]))
            .unwrap();

        let taken = Assignment {
            course_id: courses[1],
            teacher_id: teachers[1],
            timeslot_id: slots[2],
            room_id: rooms[2],
        };
        assert_eq!(schedules.check(&taken, None).unwrap(), Some(Conflict::Room));

        let busy_teacher = Assignment {
            course_id: courses[1],
            teacher_id: teachers[0],
            timeslot_id: slots[2],
            room_id: rooms[3],
        };
        assert_eq!(schedules.check(&busy_teacher, None).unwrap(), Some(Conflict::Teacher));

        let free = Assignment {
            course_id: courses[1],
            teacher_id: teachers[1],
            timeslot_id: slots[3],
            room_id: rooms[2],
        };
        assert_eq!(schedules.check(&free, None).unwrap(), None);

        // Nothing was written by any of the checks.
        assert_eq!(schedules.list().unwrap().len(), 1);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_check_with_exclusion(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("exclude");
        let mut schedules = Schedules::new().unwrap();

        let id = schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[4], rooms[1]))
            .unwrap();

        let same_spot = Assignment {
            course_id: courses[0],
            teacher_id: teachers[0],
            timeslot_id: slots[4],
            room_id: rooms[1],
        };
        // Excluding the record itself clears both conflicts, as an update would.
        assert_eq!(schedules.check(&same_spot, Some(id)).unwrap(), None);
        assert_eq!(schedules.check(&same_spot, None).unwrap(), Some(Conflict::Room));
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_delete_frees_the_slot(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("release");
        let mut schedules = Schedules::new().unwrap();

        let id = schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[3], rooms[4]))
            .unwrap();
        schedules.delete(id).unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[1], teachers[1], slots[3], rooms[4]))
            .unwrap();
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_list_detailed_shows_display_columns(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("detail");
        let mut schedules = Schedules::new().unwrap();

        schedules
            .insert_checked(&ClassSchedule::new(courses[0], teachers[0], slots[0], rooms[0]))
            .unwrap();

        let detailed = schedules.list_detailed().unwrap();
        assert_eq!(detailed.len(), 1);
        assert_eq!(detailed[0].course, "Course A detail");
        assert_eq!(detailed[0].teacher, "Teacher A detail");
        assert!(detailed[0].timeslot.contains(" - "));
    }

    /// Writes a schedule row with raw SQL, bypassing the conflict checks.
    fn insert_raw(conn: &rusqlite::Connection, course: i64, teacher: i64, slot: i64, room: i64) -> rusqlite::Result<usize> {
        conn.execute(
            "INSERT INTO class_schedules (course_id, teacher_id, timeslot_id, room_id) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![course, teacher, slot, room],
        )
    }

    fn assert_constraint_violation(result: rusqlite::Result<usize>) {
        match result {
            Err(rusqlite::Error::SqliteFailure(error, _)) => {
                assert_eq!(error.code, rusqlite::ErrorCode::ConstraintViolation);
            }
            other => panic!("expected a constraint violation, got {:?}", other),
        }
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_storage_rejects_double_booked_room(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("rawroom");
        let db = Db::new().unwrap();

        insert_raw(&db.conn, courses[0], teachers[0], slots[0], rooms[0]).unwrap();
        assert_constraint_violation(insert_raw(&db.conn, courses[1], teachers[1], slots[0], rooms[0]));

        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM class_schedules", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(ScheduleTestContext)]
    #[test]
    fn test_storage_rejects_double_booked_teacher(_ctx: &mut ScheduleTestContext) {
        let (courses, teachers, rooms, slots) = seed_records("rawteacher");
        let db = Db::new().unwrap();

        insert_raw(&db.conn, courses[0], teachers[0], slots[0], rooms[0]).unwrap();
        assert_constraint_violation(insert_raw(&db.conn, courses[1], teachers[0], slots[0], rooms[1]));
    }
}
