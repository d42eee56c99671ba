pub mod console;
pub mod output;
pub mod wizard;

pub use console::{Console, ScriptedConsole, StdConsole};
