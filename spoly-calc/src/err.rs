use derive_more::Display;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum CalcError {
    #[display("WRONG COMMAND")]
    WrongCommand,
    #[display("DEG BY WRONG VARIABLE")]
    DegByArg,
    #[display("AT WRONG VALUE")]
    AtArg,
    #[display("COMPOSE WRONG PARAMETER")]
    ComposeArg,
    #[display("STACK UNDERFLOW")]
    StackUnderflow,
    #[display("WRONG POLY")]
    WrongPoly,
}

impl std::error::Error for CalcError {}

macro_rules! ensure {
    ($cond:expr, $e:expr) => {{
        if !$cond {
            return Err($e);
        }
    }}
}

pub(crate) use ensure;
