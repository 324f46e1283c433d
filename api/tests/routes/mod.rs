mod auth_test;
mod department_test;
mod health_test;
mod me_test;
