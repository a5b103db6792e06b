mod list;
mod run;

pub use list::cmd_list;
pub use run::{RunArgs, cmd_run};
