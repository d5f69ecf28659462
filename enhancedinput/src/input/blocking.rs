//! Blocking prompt engine over `std::io`.
use super::attempt::{collect_hints, evaluate, strip_line_ending};
use crate::{colors, error::PromptError, theme::Theme, validator::Validator};
use log::{debug, trace, warn};
use std::{
    convert::Infallible,
    io::{self, BufRead, BufReader, Cursor, Read, Stdin, StdinLock, Stdout, Write},
    str::FromStr,
};

/// Something the engine can pull one line of input at a time from.
///
/// Implemented for [`Stdin`] (which is locked only for the duration of each
/// read) and for the usual in-memory and buffered readers.
pub trait LineSource {
    /// Appends one line, terminator included, to `buf`. Returns `0` at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl LineSource for StdinLock<'_> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts the user until the input passes every validator.
///
/// # Example
/// ```rust,no_run
/// use enhancedinput::{EnhancedInput, LengthValidator, Theme};
///
/// let mut input = EnhancedInput::new(Theme::fancy());
/// let length = LengthValidator::new(1, Some(20))?;
/// let name = input.get("What is your name?", &[&length])?;
/// println!("Hello, {name}!");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EnhancedInput<R = Stdin, W = Stdout> {
    reader: R,
    writer: W,
    theme: Theme,
    invalid_input_message: String,
}

impl EnhancedInput {
    /// Engine over the process' stdin/stdout.
    pub fn new(theme: Theme) -> Self {
        EnhancedInput::with_io(io::stdin(), io::stdout(), theme)
    }
}

impl Default for EnhancedInput {
    fn default() -> Self {
        EnhancedInput::new(Theme::default())
    }
}

impl<R: LineSource, W: Write> EnhancedInput<R, W> {
    pub fn with_io(reader: R, writer: W, theme: Theme) -> Self {
        EnhancedInput {
            reader,
            writer,
            theme,
            invalid_input_message: format!("{}Invalid input{}", colors::RED, colors::END),
        }
    }

    /// Replaces the line printed after each rejected attempt.
    pub fn with_invalid_input_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_input_message = message.into();
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Gives back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Asks for a line and returns it as typed (line terminator removed).
    pub fn get(&mut self, prompt: &str, validators: &[&dyn Validator]) -> Result<String, PromptError> {
        self.get_with(
            prompt,
            |line: &str| Ok::<_, Infallible>(line.to_string()),
            None,
            validators,
        )
    }

    /// Asks for a line that must also parse as `T`.
    pub fn get_as<T: FromStr>(
        &mut self,
        prompt: &str,
        validators: &[&dyn Validator],
    ) -> Result<T, PromptError> {
        self.get_with(prompt, str::parse::<T>, None, validators)
    }

    /// Full form: `convert` turns the line into `T` (an `Err` means the user
    /// is asked again) and `theme` overrides the engine's theme for this call.
    pub fn get_with<T, E, F>(
        &mut self,
        prompt: &str,
        convert: F,
        theme: Option<&Theme>,
        validators: &[&dyn Validator],
    ) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, E>,
    {
        let hints = collect_hints(validators);
        let rendered = theme.unwrap_or(&self.theme).format(prompt, &hints);

        let value = loop {
            trace!("Prompting: {prompt:?}");
            self.writer.write_all(rendered.as_bytes())?;
            self.writer.flush()?;

            let mut line = String::new();
            let read = match self.reader.read_line(&mut line) {
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!("Rejected input: not valid UTF-8");
                    writeln!(self.writer, "{}", self.invalid_input_message)?;
                    continue;
                }
                read => read?,
            };
            if read == 0 {
                warn!("Input closed while waiting for {prompt:?}");
                self.reset_style()?;
                return Err(PromptError::InputClosed);
            }
            strip_line_ending(&mut line);

            match evaluate(&line, &convert, validators) {
                Some(value) => break value,
                None => writeln!(self.writer, "{}", self.invalid_input_message)?,
            }
        };

        debug!("Accepted input for {prompt:?}");
        self.reset_style()?;
        Ok(value)
    }

    fn reset_style(&mut self) -> io::Result<()> {
        self.writer.write_all(colors::END.as_bytes())?;
        self.writer.flush()
    }
}
