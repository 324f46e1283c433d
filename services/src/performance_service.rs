use db::models::{department, student};
use db::performance::{self, DepartmentPerformance, StudentPerformance};
use serde::Serialize;

use crate::error::ServiceError;
use crate::record_store::RecordStore;
use crate::viewer::Viewer;

pub const STUDENT_LOGIN_REQUIRED: &str = "Please log in to view your dashboard.";
pub const DEPARTMENT_LOGIN_REQUIRED: &str = "Please log in as a department admin to view this page.";

/// Everything a student dashboard (or an admin's view of it) renders.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub student: student::Model,
    pub department: Option<department::Model>,
    #[serde(flatten)]
    pub performance: StudentPerformance,
    /// True when a department admin is looking at someone else's record.
    pub is_admin_view: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentDashboard {
    pub department: department::Model,
    #[serde(flatten)]
    pub performance: DepartmentPerformance,
}

pub struct PerformanceService;

impl PerformanceService {
    /// The signed-in student's own dashboard.
    pub async fn my_dashboard<S>(store: &S, viewer: &Viewer) -> Result<StudentDashboard, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let student_id = viewer
            .student_id()
            .ok_or(ServiceError::Unauthenticated(STUDENT_LOGIN_REQUIRED))?;

        let student = store
            .find_student(student_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Student not found. Please log in again.".into()))?;

        Self::build_student_dashboard(store, student, false).await
    }

    /// A student's dashboard as seen by a department admin.
    pub async fn student_dashboard_for_admin<S>(
        store: &S,
        viewer: &Viewer,
        student_id: &str,
    ) -> Result<StudentDashboard, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        if viewer.department_id().is_none() {
            return Err(ServiceError::Unauthenticated(DEPARTMENT_LOGIN_REQUIRED));
        }

        let student = Self::find_student_or_404(store, student_id).await?;
        Self::build_student_dashboard(store, student, true).await
    }

    /// Printable report for one student. Same data as the admin view.
    pub async fn student_report<S>(
        store: &S,
        viewer: &Viewer,
        student_id: &str,
    ) -> Result<StudentDashboard, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        tracing::info!(student_id, ?viewer, "generating student report");
        Self::student_dashboard_for_admin(store, viewer, student_id).await
    }

    pub async fn department_dashboard<S>(store: &S, viewer: &Viewer) -> Result<DepartmentDashboard, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let department_id = viewer
            .department_id()
            .ok_or(ServiceError::Unauthenticated(DEPARTMENT_LOGIN_REQUIRED))?;

        let department = store
            .find_department(department_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Department not found.".into()))?;

        let students = store.list_enrollments_for_department(department_id).await?;
        let courses = store.list_course_enrollments_for_department(department_id).await?;

        Ok(DepartmentDashboard {
            department,
            performance: performance::aggregate_department(students, courses),
        })
    }

    async fn find_student_or_404<S>(store: &S, student_id: &str) -> Result<student::Model, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        store
            .find_student(student_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Student with ID {student_id} not found.")))
    }

    async fn build_student_dashboard<S>(
        store: &S,
        student: student::Model,
        is_admin_view: bool,
    ) -> Result<StudentDashboard, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let records = store.list_enrollments_for_student(student.id).await?;
        let department = store.find_department(student.department_id).await?;

        Ok(StudentDashboard {
            performance: performance::aggregate_student(&records),
            department,
            student,
            is_admin_view,
        })
    }
}
