mod list_login_logs;

pub use list_login_logs::ListLoginLogsService;
