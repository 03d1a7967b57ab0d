mod health_test;
mod helpers;
mod report_test;
mod user_test;
mod weekly_operation_test;
