use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use db::models::{department, student};

use crate::error::ServiceError;
use crate::record_store::RecordStore;

pub const INVALID_STUDENT_CREDENTIALS: &str = "Invalid Matriculation Number or Password.";
pub const INVALID_DEPARTMENT_CREDENTIALS: &str = "Invalid Department or Password.";

pub struct CredentialService;

impl CredentialService {
    /// Checks a student's matriculation number and password.
    ///
    /// Unknown students, students without a password and wrong passwords all
    /// fail with the same [`INVALID_STUDENT_CREDENTIALS`] message.
    pub async fn verify_student<S>(
        store: &S,
        student_id: &str,
        password: &str,
    ) -> Result<student::Model, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let invalid = || ServiceError::InvalidCredential(INVALID_STUDENT_CREDENTIALS);
        let student_id = student_id.trim();

        let Some(stored) = store.get_student_credential(student_id).await? else {
            return Err(invalid());
        };
        if !Self::verify_password(&stored, password) {
            return Err(invalid());
        }

        store.find_student(student_id).await?.ok_or_else(invalid)
    }

    /// Checks a department admin login. `department` is the department's id
    /// as submitted by the login form; anything that is not an integer is
    /// treated like an unknown department.
    pub async fn verify_department<S>(
        store: &S,
        department: &str,
        password: &str,
    ) -> Result<department::Model, ServiceError>
    where
        S: RecordStore + ?Sized,
    {
        let invalid = || ServiceError::InvalidCredential(INVALID_DEPARTMENT_CREDENTIALS);

        let Ok(department_id) = department.trim().parse::<i64>() else {
            return Err(invalid());
        };

        let Some(stored) = store.get_department_credential(department_id).await? else {
            return Err(invalid());
        };
        if !Self::verify_password(&stored, password) {
            return Err(invalid());
        }

        store.find_department(department_id).await?.ok_or_else(invalid)
    }

    pub fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::Hashing(e.to_string()))
    }

    /// Verifies `submitted` against a stored credential.
    ///
    /// Only argon2 PHC strings (`$argon2id$...`, `$argon2i$...`, `$argon2d$...`)
    /// go through argon2. Anything else, including plaintext that merely looks
    /// like `$scheme$rest`, is a legacy credential and must match exactly.
    /// An empty stored value never matches.
    pub fn verify_password(stored: &str, submitted: &str) -> bool {
        if stored.is_empty() {
            return false;
        }

        match PasswordHash::new(stored) {
            Ok(parsed) if argon2::Algorithm::try_from(parsed.algorithm).is_ok() => Argon2::default()
                .verify_password(submitted.as_bytes(), &parsed)
                .is_ok(),
            _ => {
                tracing::warn!("plaintext credential in use; re-hash it with the seeder or an admin reset");
                stored == submitted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_store::DbRecordStore;
    use db::test_utils::{seed_sample_data, setup_test_db};

    #[test]
    fn hashes_verify_and_are_salted() {
        let a = CredentialService::hash_password("hunter2").unwrap();
        let b = CredentialService::hash_password("hunter2").unwrap();

        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
        assert!(CredentialService::verify_password(&a, "hunter2"));
        assert!(!CredentialService::verify_password(&a, "hunter3"));
    }

    #[test]
    fn legacy_plaintext_is_compared_exactly() {
        assert!(CredentialService::verify_password("secret", "secret"));
        assert!(!CredentialService::verify_password("secret", "Secret"));
        assert!(!CredentialService::verify_password("secret", "secret "));
    }

    #[test]
    fn dollar_prefixed_plaintext_is_not_treated_as_a_hash() {
        for stored in ["$abcd$efgh", "$pass$word12", "$2y$secret"] {
            assert!(CredentialService::verify_password(stored, stored), "{stored}");
            assert!(!CredentialService::verify_password(stored, "other"), "{stored}");
        }
    }

    #[test]
    fn empty_stored_credential_never_matches() {
        assert!(!CredentialService::verify_password("", ""));
        assert!(!CredentialService::verify_password("", "anything"));
    }

    #[tokio::test]
    async fn student_login_with_hashed_password() {
        let db = setup_test_db().await;
        let hash = CredentialService::hash_password("correct horse").unwrap();
        seed_sample_data(&db, &hash).await;
        let store = DbRecordStore::new(db);

        let student = CredentialService::verify_student(&store, "U2021/5570183", "correct horse")
            .await
            .unwrap();
        assert_eq!(student.name, "Ada Obi");

        let padded = CredentialService::verify_student(&store, "  U2021/5570183 ", "correct horse").await;
        assert!(padded.is_ok());
    }

    #[tokio::test]
    async fn student_failures_share_one_message() {
        let db = setup_test_db().await;
        seed_sample_data(&db, "legacy").await;
        let store = DbRecordStore::new(db);

        let wrong_password = CredentialService::verify_student(&store, "U2021/5570183", "nope")
            .await
            .unwrap_err();
        let unknown_student = CredentialService::verify_student(&store, "U0000/0000000", "legacy")
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), INVALID_STUDENT_CREDENTIALS);
        assert_eq!(unknown_student.to_string(), INVALID_STUDENT_CREDENTIALS);
        assert!(matches!(wrong_password, ServiceError::InvalidCredential(_)));
    }

    #[tokio::test]
    async fn student_without_password_cannot_log_in() {
        let db = setup_test_db().await;
        let data = seed_sample_data(&db, "legacy").await;
        db::models::student::Model::create(
            &db,
            "U2023/0000009",
            "No Password",
            "nopw@example.com",
            None,
            data.computing.id,
            None,
        )
        .await
        .unwrap();
        let store = DbRecordStore::new(db);

        let err = CredentialService::verify_student(&store, "U2023/0000009", "")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_STUDENT_CREDENTIALS);
    }

    #[tokio::test]
    async fn department_login() {
        let db = setup_test_db().await;
        let hash = CredentialService::hash_password("dept-pass").unwrap();
        let data = seed_sample_data(&db, &hash).await;
        let store = DbRecordStore::new(db);

        let dept = CredentialService::verify_department(&store, &data.computing.id.to_string(), "dept-pass")
            .await
            .unwrap();
        assert_eq!(dept.name, "Computer Science");
    }

    #[tokio::test]
    async fn department_failures_share_one_message() {
        let db = setup_test_db().await;
        let data = seed_sample_data(&db, "legacy").await;
        let store = DbRecordStore::new(db);

        let cases = [
            (data.computing.id.to_string(), "wrong"),
            // no credential row for maths
            (data.maths.id.to_string(), "legacy"),
            ("9999".to_string(), "legacy"),
            ("computer-science".to_string(), "legacy"),
            (String::new(), "legacy"),
        ];

        for (department, password) in cases {
            let err = CredentialService::verify_department(&store, &department, password)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), INVALID_DEPARTMENT_CREDENTIALS, "department {department:?}");
        }
    }
}
