pub mod course;
pub mod department;
pub mod enrollment;
pub mod semester;
pub mod student;
