use std::io::{self, BufRead, Write};
use log::debug;
use num_traits::Zero;
use spoly::Poly;
use spoly::parse::parse_poly;

use crate::cmd::Cmd;
use crate::err::{ensure, CalcError};
use crate::stack::Stack;

/// The interpreter. Results are written to `out`, diagnostics to `err`.
pub struct Calc<W, E>
where W: Write, E: Write {
    stack: Stack,
    out: W,
    err: E,
}

fn flag(b: bool) -> String {
    u8::from(b).to_string()
}

impl<W, E> Calc<W, E>
where W: Write, E: Write {
    pub fn new(out: W, err: E) -> Self {
        Self { stack: Stack::new(), out, err }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Interprets `input` line by line until it is exhausted. Lines are
    /// numbered from 1. Only I/O failures end the run early.
    pub fn run<R>(&mut self, mut input: R) -> io::Result<()>
    where R: BufRead {
        let mut buf = Vec::new();
        let mut n = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break
            }
            n += 1;

            let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
            self.process(n, line)?;
        }

        self.out.flush()?;
        self.err.flush()
    }

    /// Interprets a single line (without its terminator), reporting the
    /// outcome as line number `n`.
    pub fn process(&mut self, n: usize, line: &[u8]) -> io::Result<()> {
        debug!("{n}: {}", String::from_utf8_lossy(line));

        match self.interpret(line) {
            Ok(Some(res)) => writeln!(self.out, "{res}"),
            Ok(None) => Ok(()),
            Err(e) => {
                debug!("{n}: {e}");
                writeln!(self.err, "ERROR {n} {e}")
            }
        }
    }

    fn interpret(&mut self, line: &[u8]) -> Result<Option<String>, CalcError> {
        match line.first() {
            None | Some(b'#') => Ok(None),
            Some(c) if c.is_ascii_alphabetic() => {
                let cmd = Cmd::parse(line)?;
                self.exec(cmd)
            },
            Some(_) => {
                let p = parse_poly(line).map_err(|_| CalcError::WrongPoly)?;
                self.stack.push(p);
                Ok(None)
            }
        }
    }

    /// Executes `cmd`, returning the text it prints, if any. On failure the
    /// stack is left as it was.
    pub fn exec(&mut self, cmd: Cmd) -> Result<Option<String>, CalcError> {
        use CalcError::StackUnderflow;

        let s = &mut self.stack;
        let res = match cmd {
            Cmd::Zero => {
                s.push(Poly::zero());
                None
            },
            Cmd::IsCoeff => {
                let p = s.peek().ok_or(StackUnderflow)?;
                Some(flag(p.is_const()))
            },
            Cmd::IsZero => {
                let p = s.peek().ok_or(StackUnderflow)?;
                Some(flag(p.is_zero()))
            },
            Cmd::Clone => {
                let p = s.peek().ok_or(StackUnderflow)?.clone();
                s.push(p);
                None
            },
            Cmd::Add => return self.binary(|p, q| p + q),
            Cmd::Mul => return self.binary(|p, q| p * q),
            Cmd::Sub => return self.binary(|p, q| p - q),
            Cmd::Neg => {
                let p = s.peek_mut().ok_or(StackUnderflow)?;
                *p = -&*p;
                None
            },
            Cmd::IsEq => {
                let (p, q) = s.peek2().ok_or(StackUnderflow)?;
                Some(flag(p == q))
            },
            Cmd::Deg => {
                let p = s.peek().ok_or(StackUnderflow)?;
                Some(p.deg().to_string())
            },
            Cmd::DegBy(i) => {
                let p = s.peek().ok_or(StackUnderflow)?;
                Some(p.deg_by(i).to_string())
            },
            Cmd::At(x) => {
                let p = s.peek_mut().ok_or(StackUnderflow)?;
                *p = p.at(x);
                None
            },
            Cmd::Compose(k) => {
                ensure!(s.len() > k, StackUnderflow);
                let p = s.pop().ok_or(StackUnderflow)?;
                let qs = s.pop_n(k).ok_or(StackUnderflow)?;
                s.push(p.compose(&qs));
                None
            },
            Cmd::Print => {
                let p = s.peek().ok_or(StackUnderflow)?;
                Some(p.to_string())
            },
            Cmd::Pop => {
                s.pop().ok_or(StackUnderflow)?;
                None
            },
        };
        Ok(res)
    }

    // pops p (the top) and q (below it), pushes f(p, q).
    fn binary<F>(&mut self, f: F) -> Result<Option<String>, CalcError>
    where F: FnOnce(Poly, Poly) -> Poly {
        let (p, q) = self.stack.pop2().ok_or(CalcError::StackUnderflow)?;
        self.stack.push(f(p, q));
        Ok(None)
    }
}
