use std::any::Any;
use std::panic::UnwindSafe;
use std::time::{Duration, Instant};

use super::err::AppError;

pub fn measure<F, Res>(proc: F) -> (Res, Duration)
where F: FnOnce() -> Res {
    let start = Instant::now();
    let res = proc();
    (res, start.elapsed())
}

// Payloads of `panic!` are a `&str` or a `String`.
fn panic_message(e: Box<dyn Any + Send>) -> String {
    match e.downcast::<String>() {
        Ok(s) => *s,
        Err(e) => match e.downcast::<&str>() {
            Ok(s) => s.to_string(),
            Err(_) => "unknown payload".to_owned()
        }
    }
}

/// Runs `f`, turning a panic into `AppError::Panic`.
pub fn guard_panic<F, R>(f: F) -> Result<R, AppError>
where F: FnOnce() -> Result<R, AppError> + UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|e|
        Err(AppError::Panic(panic_message(e)))
    )
}
