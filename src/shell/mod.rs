//! External command execution and environment lookup.

pub mod command;
pub mod mock;
pub mod path;
pub mod platform;

pub use command::{display_command, CommandOutput, CommandRunner, SystemCommandRunner};
pub use mock::MockCommandRunner;
pub use path::{parse_system_path, resolve_all_tool_paths, resolve_tool_path};
pub use platform::{is_ci, login_shell};
