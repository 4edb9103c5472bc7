#[cfg(test)]
mod tests {
    use cams::db::courses::{Course, Courses};
    use cams::db::departments::{Department, Departments};
    use cams::db::students::{Student, Students};
    use cams::db::teachers::{Teacher, Teachers};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecordsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_department_crud(_ctx: &mut RecordsTestContext) {
        let mut departments = Departments::new().unwrap();

        let id = departments.create(&Department::new("Mathematics".to_string())).unwrap();
        assert!(id > 0);

        let fetched = departments.get_by_name("Mathematics").unwrap().unwrap();
        assert_eq!(fetched.id, Some(id));

        departments.update(id, "Applied Mathematics").unwrap();
        let updated = departments.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.name, "Applied Mathematics");

        departments.delete(id).unwrap();
        assert!(departments.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_department_update_missing_id_fails(_ctx: &mut RecordsTestContext) {
        let mut departments = Departments::new().unwrap();
        assert!(departments.update(9999, "Ghost").is_err());
        assert!(departments.delete(9999).is_err());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_student_crud(_ctx: &mut RecordsTestContext) {
        let mut students = Students::new().unwrap();

        let dob = NaiveDate::from_ymd_opt(2004, 3, 15).unwrap();
        let id = students
            .create(&Student::new("Grace Hopper".to_string(), dob, "grace@college.edu".to_string()))
            .unwrap();

        let fetched = students.get_by_email("grace@college.edu").unwrap().unwrap();
        assert_eq!(fetched.name, "Grace Hopper");
        assert_eq!(fetched.dob, dob);

        let mut student = students.get_by_id(id).unwrap().unwrap();
        student.email = "g.hopper@college.edu".to_string();
        students.update(id, &student).unwrap();
        assert!(students.get_by_email("grace@college.edu").unwrap().is_none());
        assert!(students.get_by_email("g.hopper@college.edu").unwrap().is_some());

        students.delete(id).unwrap();
        assert!(students.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_student_email_is_unique(_ctx: &mut RecordsTestContext) {
        let mut students = Students::new().unwrap();

        let dob = NaiveDate::from_ymd_opt(2003, 7, 1).unwrap();
        students
            .create(&Student::new("First".to_string(), dob, "shared@college.edu".to_string()))
            .unwrap();
        let duplicate = students.create(&Student::new("Second".to_string(), dob, "shared@college.edu".to_string()));
        assert!(duplicate.is_err());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_teacher_crud(_ctx: &mut RecordsTestContext) {
        let mut teachers = Teachers::new().unwrap();

        let id = teachers
            .create(&Teacher::new("Alan Turing".to_string(), "turing@college.edu".to_string()))
            .unwrap();

        let mut teacher = teachers.get_by_email("turing@college.edu").unwrap().unwrap();
        assert_eq!(teacher.id, Some(id));

        teacher.name = "A. M. Turing".to_string();
        teachers.update(id, &teacher).unwrap();
        assert_eq!(teachers.get_by_id(id).unwrap().unwrap().name, "A. M. Turing");

        teachers.delete(id).unwrap();
        assert!(teachers.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_course_crud_with_department(_ctx: &mut RecordsTestContext) {
        let mut departments = Departments::new().unwrap();
        let dept_id = departments.create(&Department::new("Physics".to_string())).unwrap();

        let mut courses = Courses::new().unwrap();
        let id = courses
            .create(&Course::new("Quantum Mechanics".to_string(), "4".to_string(), Some(dept_id)))
            .unwrap();

        let detailed = courses.list_detailed().unwrap();
        let row = detailed.iter().find(|c| c.id == id).unwrap();
        assert_eq!(row.department, "Physics");

        let mut course = courses.get_by_id(id).unwrap().unwrap();
        course.credit = "5".to_string();
        courses.update(id, &course).unwrap();
        assert_eq!(courses.get_by_id(id).unwrap().unwrap().credit, "5");

        courses.delete(id).unwrap();
        assert!(courses.get_by_id(id).unwrap().is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_course_without_department_shows_placeholder(_ctx: &mut RecordsTestContext) {
        let mut courses = Courses::new().unwrap();
        let id = courses.create(&Course::new("Elective Writing".to_string(), "2".to_string(), None)).unwrap();

        let detailed = courses.list_detailed().unwrap();
        let row = detailed.iter().find(|c| c.id == id).unwrap();
        assert_eq!(row.department, "-");
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_deleting_department_keeps_courses(_ctx: &mut RecordsTestContext) {
        let mut departments = Departments::new().unwrap();
        let dept_id = departments.create(&Department::new("Short Lived".to_string())).unwrap();

        let mut courses = Courses::new().unwrap();
        let course_id = courses
            .create(&Course::new("Orphaned Course".to_string(), "3".to_string(), Some(dept_id)))
            .unwrap();

        departments.delete(dept_id).unwrap();

        // The course survives with its department reference cleared.
        let course = courses.get_by_id(course_id).unwrap().unwrap();
        assert_eq!(course.department_id, None);
    }
}
