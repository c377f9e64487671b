mod common;
mod test_config;
mod test_error;
mod test_requests;
