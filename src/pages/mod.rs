pub mod bootcamps;
pub mod checkout_success;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod legal;
pub mod login;
pub mod profile;
pub mod register;
pub mod transactions;
pub mod webinars;
