use serde::{Deserialize, Serialize};
use services::Viewer;

/// Which kind of account a token was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Department,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Matriculation number for students, department id for department admins.
    pub sub: String,
    pub role: Role,
    /// Display name, used in greetings and logout messages.
    pub name: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role
    }

    /// The request context handed to the services layer.
    pub fn viewer(&self) -> Viewer {
        match self.0.role {
            Role::Student => Viewer::Student {
                student_id: self.0.sub.clone(),
            },
            Role::Department => match self.0.sub.parse::<i64>() {
                Ok(department_id) => Viewer::Department { department_id },
                Err(_) => Viewer::Anonymous,
            },
        }
    }
}
