//! Line-oriented prompts for interactive use.
//!
//! Each prompt is written to the output, a line is read from the input, and the answer is parsed
//! and passed through a validator. Invalid answers are reported and the question is asked again.
//! Reaching the end of the input is an error rather than an infinite loop.

use std::fmt::Display;
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stderr> {
    /// Reads from stdin and writes prompts to stderr, so that stdout is left for results.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// An empty answer gives `None`.
    pub fn optional<S, T: FromStr, F>(&mut self, prompt: &str, validator: F) -> io::Result<Option<S>>
    where
        F: Fn(T) -> Result<S, String>,
        <T as FromStr>::Err: Display,
    {
        self.inner(prompt, |x| {
            if x.is_empty() {
                Ok(None)
            } else {
                parse_and_validate(x, &validator).map(Some)
            }
        })
    }

    /// An empty answer is replaced by `default`, which goes through the same validation.
    pub fn with_default<S, T: FromStr, F>(
        &mut self,
        prompt: &str,
        default: &str,
        validator: F,
    ) -> io::Result<S>
    where
        F: Fn(T) -> Result<S, String>,
        <T as FromStr>::Err: Display,
    {
        let prompt = format!("{prompt} [default: {default}]");
        self.inner(&prompt, |x| {
            parse_and_validate(if x.is_empty() { default } else { x }, &validator)
        })
    }

    pub fn raw<S, T: FromStr, F>(&mut self, prompt: &str, validator: F) -> io::Result<S>
    where
        F: Fn(T) -> Result<S, String>,
        <T as FromStr>::Err: Display,
    {
        self.inner(prompt, |x| parse_and_validate(x, &validator))
    }

    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.with_default(prompt, "y", |response: String| {
            if response.starts_with('y') || response.starts_with('n') {
                Ok(response.starts_with('y'))
            } else {
                Err(format!(
                    "unrecognized response '{response}'. Should be '(y)es' or '(n)o'"
                ))
            }
        })
    }

    fn inner<S, F>(&mut self, prompt: &str, validator: F) -> io::Result<S>
    where
        F: for<'a> Fn(&'a str) -> Result<S, String>,
    {
        loop {
            write!(self.output, "{prompt} : ")?;
            self.output.flush()?;
            let mut input = String::new();
            if self.input.read_line(&mut input)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input ended while waiting for: {prompt}"),
                ));
            }
            match validator(input.trim()) {
                Ok(res) => return Ok(res),
                Err(e) => writeln!(self.output, "Invalid input: {e}. Try again")?,
            }
        }
    }
}

fn parse_and_validate<S, T: FromStr, F>(x: &str, validator: &F) -> Result<S, String>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    x.parse::<T>()
        .map_err(|err| err.to_string())
        .and_then(validator)
}

pub fn optional<S, T: FromStr, F>(prompt: &str, validator: F) -> io::Result<Option<S>>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    Prompter::stdio().optional(prompt, validator)
}

pub fn with_default<S, T: FromStr, F>(prompt: &str, default: &str, validator: F) -> io::Result<S>
where
    F: Fn(T) -> Result<S, String>,
    <T as FromStr>::Err: Display,
{
    Prompter::stdio().with_default(prompt, default, validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn retries_until_valid() {
        let mut p = prompter("abc\n-3\n7\n");
        let n: u32 = p
            .raw("Size", |n: i32| {
                u32::try_from(n).map_err(|_| "size must be non-negative".to_string())
            })
            .unwrap();
        assert_eq!(n, 7);
        assert_eq!(
            output(p),
            "Size : Invalid input: invalid digit found in string. Try again\n\
             Size : Invalid input: size must be non-negative. Try again\n\
             Size : "
        );
    }

    #[test]
    fn defaults() {
        let mut p = prompter("\n  12 \n");
        let a: u32 = p.with_default("First", "5", Ok).unwrap();
        let b: u32 = p.with_default("Second", "5", Ok).unwrap();
        assert_eq!((a, b), (5, 12));
    }

    #[test]
    fn optional_and_yes_no() {
        let mut p = prompter("\nmaybe\nno\n");
        let limit: Option<usize> = p.optional("Limit", Ok).unwrap();
        assert_eq!(limit, None);
        assert!(!p.yes_no("Continue?").unwrap());
    }

    #[test]
    fn end_of_input() {
        let mut p = prompter("x\n");
        let err = p.raw("Size", |n: u32| Ok::<_, String>(n)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
