#[cfg(test)]
mod tests {
    use cams::db::courses::{Course, Courses};
    use cams::db::enrollments::{Enrollment, Enrollments};
    use cams::db::students::{Student, Students};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EnrollmentTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for EnrollmentTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EnrollmentTestContext { _temp_dir: temp_dir }
        }
    }

    fn seed_student_and_course(tag: &str) -> (i64, i64) {
        let mut students = Students::new().unwrap();
        let dob = NaiveDate::from_ymd_opt(2005, 1, 20).unwrap();
        let student_id = students
            .create(&Student::new(format!("Student {}", tag), dob, format!("{}@college.edu", tag)))
            .unwrap();

        let mut courses = Courses::new().unwrap();
        let course_id = courses.create(&Course::new(format!("Course {}", tag), "3".to_string(), None)).unwrap();

        (student_id, course_id)
    }

    #[test_context(EnrollmentTestContext)]
    #[test]
    fn test_enrollment_crud(_ctx: &mut EnrollmentTestContext) {
        let (student_id, course_id) = seed_student_and_course("crud");
        let mut enrollments = Enrollments::new().unwrap();

        let id = enrollments
            .create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();
        assert!(id > 0);

        let fetched = enrollments.get_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.student_id, student_id);
        assert_eq!(fetched.grade, "-");

        let mut enrollment = fetched;
        enrollment.semester = "Spring 2027".to_string();
        enrollments.update(id, &enrollment).unwrap();
        assert_eq!(enrollments.get_by_id(id).unwrap().unwrap().semester, "Spring 2027");

        enrollments.delete(id).unwrap();
        assert!(enrollments.get_by_id(id).unwrap().is_none());
    }

    #[test_context(EnrollmentTestContext)]
    #[test]
    fn test_duplicate_enrollment_detected(_ctx: &mut EnrollmentTestContext) {
        let (student_id, course_id) = seed_student_and_course("dup");
        let mut enrollments = Enrollments::new().unwrap();

        enrollments
            .create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();

        assert!(enrollments.exists(student_id, course_id, "Fall 2026").unwrap());
        assert!(!enrollments.exists(student_id, course_id, "Spring 2027").unwrap());

        // The unique constraint backs the exists() check.
        let duplicate = enrollments.create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "-".to_string()));
        assert!(duplicate.is_err());

        // The same pair in another semester is a fresh enrollment.
        enrollments
            .create(&Enrollment::new(student_id, course_id, "Spring 2027".to_string(), "-".to_string()))
            .unwrap();
    }

    #[test_context(EnrollmentTestContext)]
    #[test]
    fn test_update_grade(_ctx: &mut EnrollmentTestContext) {
        let (student_id, course_id) = seed_student_and_course("grade");
        let mut enrollments = Enrollments::new().unwrap();

        let id = enrollments
            .create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();

        enrollments.update_grade(id, "A").unwrap();
        assert_eq!(enrollments.get_by_id(id).unwrap().unwrap().grade, "A");

        assert!(enrollments.update_grade(9999, "B").is_err());
    }

    #[test_context(EnrollmentTestContext)]
    #[test]
    fn test_list_by_student(_ctx: &mut EnrollmentTestContext) {
        let (student_id, course_id) = seed_student_and_course("bystudent");
        let (other_student, other_course) = seed_student_and_course("bystudent2");
        let mut enrollments = Enrollments::new().unwrap();

        enrollments
            .create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();
        enrollments
            .create(&Enrollment::new(student_id, other_course, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();
        enrollments
            .create(&Enrollment::new(other_student, other_course, "Fall 2026".to_string(), "-".to_string()))
            .unwrap();

        let mine = enrollments.list_by_student(student_id).unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|e| e.student_id == student_id));
    }

    #[test_context(EnrollmentTestContext)]
    #[test]
    fn test_list_detailed_joins_names(_ctx: &mut EnrollmentTestContext) {
        let (student_id, course_id) = seed_student_and_course("joined");
        let mut enrollments = Enrollments::new().unwrap();

        let id = enrollments
            .create(&Enrollment::new(student_id, course_id, "Fall 2026".to_string(), "B+".to_string()))
            .unwrap();

        let detailed = enrollments.list_detailed().unwrap();
        let row = detailed.iter().find(|e| e.id == id).unwrap();
        assert_eq!(row.student, "Student joined");
        assert_eq!(row.course, "Course joined");
        assert_eq!(row.grade, "B+");
    }
}
