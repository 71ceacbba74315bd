use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use log::info;
use clap::Parser;
use spoly::util::log::{init_stderr_logger, level_for};
use spoly_calc::Calc;

use super::err::AppError;
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Script to interpret; reads stdin when omitted.
    pub input: Option<PathBuf>,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<(), AppError> {
        init_stderr_logger(level_for(self.args.log)).map_err(AppError::Logger)?;

        info!("args: {:?}", self.args);
        info!("coeff-type: {}", std::any::type_name::<spoly::Coeff>());

        let (res, time) = measure(||
            guard_panic(|| self.interpret())
        );

        info!("time: {:?}", time);

        res
    }

    fn interpret(&self) -> Result<(), AppError> {
        let mut calc = Calc::new(io::stdout().lock(), io::stderr().lock());

        match &self.args.input {
            Some(path) => {
                let file = File::open(path).map_err(|e| AppError::Open(path.clone(), e))?;
                calc.run(BufReader::new(file))?
            },
            None => calc.run(io::stdin().lock())?
        }

        Ok(())
    }
}
