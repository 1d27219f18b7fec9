pub mod add;
pub mod branch;
pub mod clone;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
