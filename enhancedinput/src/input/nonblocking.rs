//! Async prompt engine over tokio's I/O traits.
//!
//! Same behavior as [`EnhancedInput`](super::EnhancedInput); the only
//! difference is that waiting for the next line suspends the task instead of
//! blocking the thread.
use super::attempt::{collect_hints, evaluate, strip_line_ending};
use crate::{colors, error::PromptError, theme::Theme, validator::Validator};
use log::{debug, trace, warn};
use std::{convert::Infallible, io, str::FromStr};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Async twin of [`EnhancedInput`](super::EnhancedInput).
///
/// # Example
/// ```rust,no_run
/// use enhancedinput::{AsyncEnhancedInput, IntRange, Theme};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut input = AsyncEnhancedInput::new(Theme::default());
/// let threads = IntRange::new(1, 16)?;
/// let n: u8 = input.get_as("Threads", &[&threads]).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncEnhancedInput<R = BufReader<Stdin>, W = Stdout> {
    reader: R,
    writer: W,
    theme: Theme,
    invalid_input_message: String,
}

impl AsyncEnhancedInput {
    pub fn new(theme: Theme) -> Self {
        AsyncEnhancedInput::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), theme)
    }
}

impl Default for AsyncEnhancedInput {
    fn default() -> Self {
        AsyncEnhancedInput::new(Theme::default())
    }
}

impl<R, W> AsyncEnhancedInput<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn with_io(reader: R, writer: W, theme: Theme) -> Self {
        AsyncEnhancedInput {
            reader,
            writer,
            theme,
            invalid_input_message: format!("{}Invalid input{}", colors::RED, colors::END),
        }
    }

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

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub async fn get(
        &mut self,
        prompt: &str,
        validators: &[&dyn Validator],
    ) -> Result<String, PromptError> {
        self.get_with(
            prompt,
            |line: &str| Ok::<_, Infallible>(line.to_string()),
            None,
            validators,
        )
        .await
    }

    pub async fn get_as<T: FromStr>(
        &mut self,
        prompt: &str,
        validators: &[&dyn Validator],
    ) -> Result<T, PromptError> {
        self.get_with(prompt, str::parse::<T>, None, validators).await
    }

    pub async fn get_with<T, E, F>(
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
            self.writer.write_all(rendered.as_bytes()).await?;
            self.writer.flush().await?;

            let mut line = String::new();
            let read = match self.reader.read_line(&mut line).await {
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!("Rejected input: not valid UTF-8");
                    self.write_invalid_input_message().await?;
                    continue;
                }
                read => read?,
            };
            if read == 0 {
                warn!("Input closed while waiting for {prompt:?}");
                self.reset_style().await?;
                return Err(PromptError::InputClosed);
            }
            strip_line_ending(&mut line);

            match evaluate(&line, &convert, validators) {
                Some(value) => break value,
                None => self.write_invalid_input_message().await?,
            }
        };

        debug!("Accepted input for {prompt:?}");
        self.reset_style().await?;
        Ok(value)
    }

    async fn write_invalid_input_message(&mut self) -> io::Result<()> {
        let message = format!("{}\n", self.invalid_input_message);
        self.writer.write_all(message.as_bytes()).await
    }

    async fn reset_style(&mut self) -> io::Result<()> {
        self.writer.write_all(colors::END.as_bytes()).await?;
        self.writer.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{EmailValidator, LengthValidator};

    fn output<R: AsyncBufRead + Unpin>(input: AsyncEnhancedInput<R, Vec<u8>>) -> String {
        String::from_utf8(input.into_inner().1).unwrap()
    }

    #[tokio::test]
    async fn test_async_accepts_first_attempt() {
        let mut input = AsyncEnhancedInput::with_io(&b"Ada\n"[..], Vec::new(), Theme::default());
        let length = LengthValidator::new(1, Some(20)).unwrap();

        assert_eq!(input.get("Name", &[&length]).await.unwrap(), "Ada");
        assert_eq!(output(input), "Name (1 - 20): \x1b[0m");
    }

    #[tokio::test]
    async fn test_async_reprompts() {
        let mut input = AsyncEnhancedInput::with_io(
            &b"nobody\nada@example.org\n"[..],
            Vec::new(),
            Theme::default(),
        );

        let mail = input.get("Mail", &[&EmailValidator]).await.unwrap();
        assert_eq!(mail, "ada@example.org");
        assert_eq!(output(input).matches("Invalid input").count(), 1);
    }

    #[tokio::test]
    async fn test_async_non_utf8_line_reprompts() {
        let mut input =
            AsyncEnhancedInput::with_io(&b"\xff\xfe\nAda\n"[..], Vec::new(), Theme::default());
        let length = LengthValidator::new(1, Some(20)).unwrap();

        assert_eq!(input.get("Name", &[&length]).await.unwrap(), "Ada");
        assert_eq!(
            output(input),
            "Name (1 - 20): \x1b[31mInvalid input\x1b[0m\nName (1 - 20): \x1b[0m"
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_async_prompt_on_spawned_task() {
        let handle = tokio::spawn(async {
            let mut input =
                AsyncEnhancedInput::with_io(&b"Ada\n"[..], Vec::new(), Theme::default());
            let length = LengthValidator::new(1, Some(20)).unwrap();
            input.get("Name", &[&length, &EmailValidator]).await
        });

        let res = handle.await.unwrap();
        assert!(matches!(res, Err(PromptError::InputClosed)));

        let handle = tokio::spawn(async {
            let mut input =
                AsyncEnhancedInput::with_io(&b"42\n"[..], Vec::new(), Theme::default());
            input.get_as::<u32>("N", &[]).await
        });
        assert_eq!(handle.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_async_get_as_and_input_closed() {
        let mut input = AsyncEnhancedInput::with_io(&b"x\n9\n"[..], Vec::new(), Theme::default());
        assert_eq!(input.get_as::<u32>("N", &[]).await.unwrap(), 9);

        let res = input.get("Again", &[]).await;
        assert!(matches!(res, Err(PromptError::InputClosed)));
    }
}
