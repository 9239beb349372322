use crate::io::{InputSource, OutputSink};

use super::AppError;

pub const GREETING_PROMPT: &str = "What is your name?";

/// Ask for a name and greet it. The name is used exactly as typed.
pub async fn greet<I, O>(input: &mut I, output: &mut O) -> Result<String, AppError>
where
    I: InputSource,
    O: OutputSink,
{
    output.write_line(GREETING_PROMPT).await?;
    let name = input.read_line().await?.ok_or(AppError::InputClosed)?;
    output.write_line(&format!("Hello, {}!", name)).await?;

    tracing::debug!(name = %name, "greeted");
    Ok(name)
}
