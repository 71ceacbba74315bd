use std::sync::LazyLock;
use regex::Regex;
use spoly::Coeff;

use crate::err::CalcError;

/// A calculator command, with its argument already validated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cmd {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(usize),
    At(Coeff),
    Compose(usize),
    Print,
    Pop,
}

static RE_INDEX: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^[0-9]+$").unwrap()
);

static RE_VALUE: LazyLock<Regex> = LazyLock::new(||
    Regex::new(r"^-?[0-9]+$").unwrap()
);

fn is_blank(c: &u8) -> bool {
    matches!(c, b' ' | b'\t')
}

fn arg_str(arg: Option<&[u8]>) -> Option<&str> {
    arg.and_then(|a| std::str::from_utf8(a).ok())
}

fn index_arg(arg: Option<&[u8]>) -> Option<usize> {
    arg_str(arg)
        .filter(|s| RE_INDEX.is_match(s))
        .and_then(|s| s.parse().ok())
}

fn value_arg(arg: Option<&[u8]>) -> Option<Coeff> {
    arg_str(arg)
        .filter(|s| RE_VALUE.is_match(s))
        .and_then(|s| s.parse().ok())
}

impl Cmd {
    /// Parses a command line: a name, then optionally a single space
    /// followed by the argument.
    pub fn parse(line: &[u8]) -> Result<Cmd, CalcError> {
        use CalcError::*;

        if let Some(i) = line.iter().position(|&c| c == 0) {
            return Err(Self::nul_error(&line[..i]))
        }

        let (name, arg) = match line.iter().position(|&c| c == b' ') {
            Some(i) => (&line[..i], Some(&line[i + 1..])),
            None => (line, None)
        };

        match name {
            b"DEG_BY"  => return index_arg(arg).map(Cmd::DegBy).ok_or(DegByArg),
            b"AT"      => return value_arg(arg).map(Cmd::At).ok_or(AtArg),
            b"COMPOSE" => return index_arg(arg).map(Cmd::Compose).ok_or(ComposeArg),
            _ => ()
        }

        // e.g. "AT\t5"
        let prefixed: [(&[u8], _); 3] = [
            (b"DEG_BY", DegByArg),
            (b"AT", AtArg),
            (b"COMPOSE", ComposeArg),
        ];
        for (prefix, e) in prefixed {
            if name.strip_prefix(prefix).and_then(|r| r.first()).is_some_and(is_blank) {
                return Err(e)
            }
        }

        if arg.is_some() {
            return Err(WrongCommand)
        }

        match name {
            b"ZERO"     => Ok(Cmd::Zero),
            b"IS_COEFF" => Ok(Cmd::IsCoeff),
            b"IS_ZERO"  => Ok(Cmd::IsZero),
            b"CLONE"    => Ok(Cmd::Clone),
            b"ADD"      => Ok(Cmd::Add),
            b"MUL"      => Ok(Cmd::Mul),
            b"NEG"      => Ok(Cmd::Neg),
            b"SUB"      => Ok(Cmd::Sub),
            b"IS_EQ"    => Ok(Cmd::IsEq),
            b"DEG"      => Ok(Cmd::Deg),
            b"PRINT"    => Ok(Cmd::Print),
            b"POP"      => Ok(Cmd::Pop),
            _ => Err(WrongCommand)
        }
    }

    // `head` is the line up to its first NUL. A NUL in the name is a wrong
    // command, a NUL in the argument is blamed on the argument.
    fn nul_error(head: &[u8]) -> CalcError {
        if !head.contains(&b' ') {
            CalcError::WrongCommand
        } else if head.starts_with(b"DEG_BY") {
            CalcError::DegByArg
        } else if head.starts_with(b"AT") {
            CalcError::AtArg
        } else if head.starts_with(b"COMPOSE") {
            CalcError::ComposeArg
        } else {
            CalcError::WrongCommand
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CalcError::*;

    fn parse(s: &str) -> Result<Cmd, CalcError> {
        Cmd::parse(s.as_bytes())
    }

    #[test]
    fn no_arg() {
        assert_eq!(parse("ZERO"), Ok(Cmd::Zero));
        assert_eq!(parse("IS_COEFF"), Ok(Cmd::IsCoeff));
        assert_eq!(parse("IS_ZERO"), Ok(Cmd::IsZero));
        assert_eq!(parse("CLONE"), Ok(Cmd::Clone));
        assert_eq!(parse("ADD"), Ok(Cmd::Add));
        assert_eq!(parse("MUL"), Ok(Cmd::Mul));
        assert_eq!(parse("NEG"), Ok(Cmd::Neg));
        assert_eq!(parse("SUB"), Ok(Cmd::Sub));
        assert_eq!(parse("IS_EQ"), Ok(Cmd::IsEq));
        assert_eq!(parse("DEG"), Ok(Cmd::Deg));
        assert_eq!(parse("PRINT"), Ok(Cmd::Print));
        assert_eq!(parse("POP"), Ok(Cmd::Pop));
    }

    #[test]
    fn wrong_command() {
        assert_eq!(parse("FOO"), Err(WrongCommand));
        assert_eq!(parse("add"), Err(WrongCommand));
        assert_eq!(parse("PRINT "), Err(WrongCommand));
        assert_eq!(parse("PRINT 1"), Err(WrongCommand));
        assert_eq!(parse("ZERO\t"), Err(WrongCommand));
        assert_eq!(parse("DEG 1"), Err(WrongCommand));
        assert_eq!(parse("DEGBY 1"), Err(WrongCommand));
        assert_eq!(parse("ATX"), Err(WrongCommand));
        assert_eq!(parse("A T 1"), Err(WrongCommand));
    }

    #[test]
    fn deg_by() {
        assert_eq!(parse("DEG_BY 0"), Ok(Cmd::DegBy(0)));
        assert_eq!(parse("DEG_BY 17"), Ok(Cmd::DegBy(17)));
        assert_eq!(parse("DEG_BY 007"), Ok(Cmd::DegBy(7)));

        assert_eq!(parse("DEG_BY"), Err(DegByArg));
        assert_eq!(parse("DEG_BY "), Err(DegByArg));
        assert_eq!(parse("DEG_BY -1"), Err(DegByArg));
        assert_eq!(parse("DEG_BY +1"), Err(DegByArg));
        assert_eq!(parse("DEG_BY  1"), Err(DegByArg));
        assert_eq!(parse("DEG_BY 1 "), Err(DegByArg));
        assert_eq!(parse("DEG_BY 1a"), Err(DegByArg));
        assert_eq!(parse("DEG_BY\t1"), Err(DegByArg));
        assert_eq!(parse("DEG_BY 99999999999999999999999"), Err(DegByArg));
    }

    #[test]
    fn at() {
        assert_eq!(parse("AT 0"), Ok(Cmd::At(0)));
        assert_eq!(parse("AT -12"), Ok(Cmd::At(-12)));
        assert_eq!(parse(&format!("AT {}", Coeff::MIN)), Ok(Cmd::At(Coeff::MIN)));
        assert_eq!(parse(&format!("AT {}", Coeff::MAX)), Ok(Cmd::At(Coeff::MAX)));

        assert_eq!(parse("AT"), Err(AtArg));
        assert_eq!(parse("AT "), Err(AtArg));
        assert_eq!(parse("AT -"), Err(AtArg));
        assert_eq!(parse("AT +3"), Err(AtArg));
        assert_eq!(parse("AT 3x"), Err(AtArg));
        assert_eq!(parse("AT\t3"), Err(AtArg));
        assert_eq!(parse(&format!("AT {}0", Coeff::MAX)), Err(AtArg));
    }

    #[test]
    fn compose() {
        assert_eq!(parse("COMPOSE 0"), Ok(Cmd::Compose(0)));
        assert_eq!(parse("COMPOSE 3"), Ok(Cmd::Compose(3)));

        assert_eq!(parse("COMPOSE"), Err(ComposeArg));
        assert_eq!(parse("COMPOSE -1"), Err(ComposeArg));
        assert_eq!(parse("COMPOSE x"), Err(ComposeArg));
        assert_eq!(parse("COMPOSE\t1"), Err(ComposeArg));
        assert_eq!(parse("COMPOSE 99999999999999999999999"), Err(ComposeArg));
    }

    #[test]
    fn nul() {
        assert_eq!(Cmd::parse(b"PRI\0NT"), Err(WrongCommand));
        assert_eq!(Cmd::parse(b"AT\0 1"), Err(WrongCommand));
        assert_eq!(Cmd::parse(b"AT 1\0"), Err(AtArg));
        assert_eq!(Cmd::parse(b"DEG_BY \x001"), Err(DegByArg));
        assert_eq!(Cmd::parse(b"COMPOSE 1\x002"), Err(ComposeArg));
        assert_eq!(Cmd::parse(b"PRINT \0"), Err(WrongCommand));
    }

    #[test]
    fn invalid_utf8_arg() {
        assert_eq!(Cmd::parse(b"AT \xff"), Err(AtArg));
        assert_eq!(Cmd::parse(b"PRINT\xff"), Err(WrongCommand));
    }
}
