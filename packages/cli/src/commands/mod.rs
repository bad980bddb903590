pub mod apply;
pub mod check;
pub mod init;
pub mod input;
pub mod suite;

pub use apply::{apply, ApplyArgs};
pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use suite::{suite, SuiteArgs};
