pub mod app;

pub use app::{get_json_body, make_app, student_token, department_token};
