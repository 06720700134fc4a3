pub mod json_file_repo;
pub mod request_log;
