//! Adapters for the external checkers rulint knows how to drive.

mod pyflakes;

pub use pyflakes::PyflakesLinter;
