use serde::Serialize;

/// JSON body returned by every route.
///
/// A student dashboard comes back as
///
/// ```json
/// {
///   "success": true,
///   "data": { "student": { "student_id": "U2021/5570183", ... }, "overall": { "cgpa": 2.67, ... } },
///   "message": "Dashboard retrieved successfully"
/// }
/// ```
///
/// Failures carry `success: false`
/// and whatever `T::default()` serializes to; handlers use
/// [`Empty`](crate::auth::guards::Empty), which becomes `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
