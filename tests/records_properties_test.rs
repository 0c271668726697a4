use campus_records::{CourseService, EnrollmentService, Grade, Instructor, RecordsError, Semester, StudentService};
use chrono::NaiveDate;

fn instructor() -> Instructor {
    Instructor::new(
        "I7".to_string(),
        "Edsger Dijkstra".to_string(),
        "ewd@uni.edu".to_string(),
        "CS".to_string(),
        NaiveDate::from_ymd_opt(2001, 9, 1).unwrap(),
    )
}

#[test]
fn test_created_student_round_trips_through_lookup() {
    let mut students = StudentService::new();
    let inputs = [
        ("10", "2024CS001", "Ada Lovelace", "ada@uni.edu"),
        ("11", "2024CS002", "Alan Turing", "alan.turing@cs.uni.edu"),
        ("12", "2024MA003", "Emmy Noether", "emmy@math.uni.org"),
    ];

    for (id, reg_no, name, email) in inputs {
        students.create_student(id, reg_no, name, email).unwrap();
        let found = students.get_student_by_reg_no(reg_no).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.reg_no, reg_no);
        assert_eq!(found.full_name, name);
        assert_eq!(found.email, email);
        assert!(found.active);
    }
}

#[test]
fn test_duplicate_reg_no_leaves_single_student() {
    let mut students = StudentService::new();
    students.create_student("1", "R1", "First", "first@uni.edu").unwrap();

    let err = students.create_student("2", "R1", "Second", "second@uni.edu").unwrap_err();
    assert!(err.is_invalid_data());

    let with_reg_no: Vec<_> = students
        .list_all_students()
        .into_iter()
        .filter(|s| s.reg_no == "R1")
        .collect();
    assert_eq!(with_reg_no.len(), 1);
    assert_eq!(with_reg_no[0].full_name, "First");
}

#[test]
fn test_deactivation_semantics() {
    let mut students = StudentService::new();
    assert!(students.deactivate_student("GHOST").unwrap_err().is_not_found());

    students.create_student("1", "R1", "Ada", "ada@uni.edu").unwrap();
    students.deactivate_student("R1").unwrap();
    let after_first = students.get_student_by_reg_no("R1").unwrap();
    assert!(!after_first.active);

    students.deactivate_student("R1").unwrap();
    assert_eq!(students.get_student_by_reg_no("R1").unwrap(), after_first);
}

#[test]
fn test_double_enrollment_keeps_one_record() {
    let mut students = StudentService::new();
    let mut courses = CourseService::new();
    let mut enrollments = EnrollmentService::new();

    let ada = students.create_student("1", "R1", "Ada", "ada@uni.edu").unwrap();
    let course = courses
        .create_course("CS101", "Intro", 3, instructor(), Semester::Spring, "CS")
        .unwrap();

    enrollments.enroll_student(&ada, &course).unwrap();
    let err = enrollments.enroll_student(&ada, &course).unwrap_err();
    assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
    assert!(!err.is_not_found());

    let for_pair: Vec<_> = enrollments
        .get_enrollments_by_student(&ada)
        .into_iter()
        .filter(|e| e.course_code == "CS101")
        .collect();
    assert_eq!(for_pair.len(), 1);
}

#[test]
fn test_gpa_example_with_ungraded_course() {
    let mut students = StudentService::new();
    let mut courses = CourseService::new();
    let mut enrollments = EnrollmentService::new();

    let ada = students.create_student("1", "R1", "Ada", "ada@uni.edu").unwrap();
    let a = courses.create_course("A", "Course A", 3, instructor(), Semester::Fall, "CS").unwrap();
    let b = courses.create_course("B", "Course B", 4, instructor(), Semester::Fall, "CS").unwrap();
    let c = courses.create_course("C", "Course C", 2, instructor(), Semester::Fall, "CS").unwrap();

    enrollments.enroll_student(&ada, &a).unwrap();
    enrollments.enroll_student(&ada, &b).unwrap();
    enrollments.assign_grade(&ada, &a, Grade::A).unwrap();
    enrollments.assign_grade(&ada, &b, Grade::B).unwrap();

    let before = enrollments.compute_gpa(&ada);
    assert!((before - 59.0 / 7.0).abs() < 1e-9);
    assert_eq!(format!("{:.2}", before), "8.43");

    enrollments.enroll_student(&ada, &c).unwrap();
    assert_eq!(enrollments.compute_gpa(&ada), before);
}

#[test]
fn test_gpa_is_zero_without_graded_enrollments() {
    let mut students = StudentService::new();
    let mut courses = CourseService::new();
    let mut enrollments = EnrollmentService::new();

    let ada = students.create_student("1", "R1", "Ada", "ada@uni.edu").unwrap();
    assert_eq!(enrollments.compute_gpa(&ada), 0.0);

    let course = courses.create_course("CS101", "Intro", 3, instructor(), Semester::Fall, "CS").unwrap();
    enrollments.enroll_student(&ada, &course).unwrap();
    assert_eq!(enrollments.compute_gpa(&ada), 0.0);
}

#[test]
fn test_assign_grade_without_enrollment_creates_nothing() {
    let mut students = StudentService::new();
    let mut courses = CourseService::new();
    let mut enrollments = EnrollmentService::new();

    let ada = students.create_student("1", "R1", "Ada", "ada@uni.edu").unwrap();
    let course = courses.create_course("CS101", "Intro", 3, instructor(), Semester::Fall, "CS").unwrap();

    let err = enrollments.assign_grade(&ada, &course, Grade::S).unwrap_err();
    assert!(err.is_not_found());
    assert!(enrollments.get_enrollments_by_student(&ada).is_empty());
    assert!(enrollments.is_empty());
}

#[test]
fn test_listings_preserve_creation_order() {
    let mut students = StudentService::new();
    let mut courses = CourseService::new();

    let reg_nos = ["R3", "R1", "R2"];
    for (i, reg_no) in reg_nos.iter().enumerate() {
        students
            .create_student(&i.to_string(), reg_no, "Someone", "someone@uni.edu")
            .unwrap();
    }
    students.deactivate_student("R1").unwrap();

    let listed: Vec<String> = students.list_all_students().into_iter().map(|s| s.reg_no).collect();
    assert_eq!(listed, reg_nos);

    let codes = ["PH110", "CS101", "MA201"];
    for code in codes {
        courses.create_course(code, "Title", 2, instructor(), Semester::Summer, "Dept").unwrap();
    }
    let listed: Vec<String> = courses.list_all_courses().into_iter().map(|c| c.code).collect();
    assert_eq!(listed, codes);
}
