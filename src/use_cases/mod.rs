pub mod poll_status;
pub mod refresh_dashboard;

#[cfg(test)]
pub mod test_support;
