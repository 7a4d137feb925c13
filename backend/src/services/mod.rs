pub mod health;
pub mod resumes;
