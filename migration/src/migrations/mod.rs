pub mod m202601100001_create_departments;
pub mod m202601100002_create_semesters;
pub mod m202601100003_create_students;
pub mod m202601100004_create_courses;
pub mod m202601100005_create_enrollments;
pub mod m202601100006_create_department_passwords;
