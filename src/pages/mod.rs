pub mod course_detail;
pub mod courses;
pub mod create_course;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod status;
pub mod update_course;
