mod graph;
mod helpers;
mod init;
mod list;
mod record;

pub(crate) use graph::cmd_graph;
pub(crate) use init::cmd_init;
pub(crate) use list::cmd_list;
pub(crate) use record::{cmd_add, cmd_delete, cmd_update};
