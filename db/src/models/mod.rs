pub mod course;
pub mod department;
pub mod department_password;
pub mod enrollment;
pub mod semester;
pub mod student;

pub use course::Entity as Course;
pub use department::Entity as Department;
pub use department_password::Entity as DepartmentPassword;
pub use enrollment::Entity as Enrollment;
pub use semester::Entity as Semester;
pub use student::Entity as Student;
