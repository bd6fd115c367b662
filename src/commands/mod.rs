pub mod accounts;
pub mod completions;
pub mod login;
pub mod logout;
pub mod organization;
pub mod use_cmd;
