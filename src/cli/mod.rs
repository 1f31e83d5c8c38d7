pub mod init;
pub mod install;
pub mod search;
pub mod uninstall;
pub mod update;
