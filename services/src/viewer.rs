/// Who is making a request. Built by the transport layer from a verified
/// token and passed explicitly into every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    /// A signed-in student, by matriculation number.
    Student { student_id: String },
    /// A signed-in department administrator.
    Department { department_id: i64 },
}

impl Viewer {
    pub fn student_id(&self) -> Option<&str> {
        match self {
            Viewer::Student { student_id } => Some(student_id),
            _ => None,
        }
    }

    pub fn department_id(&self) -> Option<i64> {
        match self {
            Viewer::Department { department_id } => Some(*department_id),
            _ => None,
        }
    }
}
