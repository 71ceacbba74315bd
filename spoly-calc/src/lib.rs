//! A line-oriented stack calculator over [`spoly::Poly`].
//!
//! Every input line is either a polynomial literal, which is pushed onto
//! the stack, or a command operating on the top of the stack. Results are
//! written to one stream and `ERROR <line> <message>` diagnostics to the
//! other.

mod err;
mod stack;
mod cmd;
mod calc;

pub use err::CalcError;
pub use stack::Stack;
pub use cmd::Cmd;
pub use calc::Calc;
