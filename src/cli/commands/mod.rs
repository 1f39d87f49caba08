pub mod add;
pub mod backup;
pub mod badges;
pub mod book;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod event;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod shelf;
