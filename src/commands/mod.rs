mod check;

pub use check::check_command;
