pub mod init;
pub mod list;
pub mod lookup;
pub mod setup;
