use std::io::{self, BufRead, Write};

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no item provided")]
    Empty,
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write prompt: {0}")]
    Prompt(#[source] io::Error),
}

/// Resolves the item name from the command line, or prompts for it.
///
/// Arguments after the program name are joined with single spaces so
/// multi-word names need no quoting. Without arguments `Item: ` is written to
/// `prompt` and the name is read from `input`: a first line holding one or
/// more words is used as typed, an empty first line falls back to the rest of
/// the stream.
pub fn resolve_item<R, W>(args: &[String], mut input: R, mut prompt: W) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    let item = if !args.is_empty() {
        args.join(" ").trim().to_owned()
    } else {
        write!(prompt, "Item: ").map_err(InputError::Prompt)?;
        prompt.flush().map_err(InputError::Prompt)?;

        let mut line = String::new();
        input.read_line(&mut line).map_err(InputError::Read)?;

        let line = line.trim();
        if line.is_empty() {
            debug!("First input line was empty, reading the rest of stdin");
            let mut rest = String::new();
            input.read_to_string(&mut rest).map_err(InputError::Read)?;
            rest.trim().to_owned()
        } else {
            line.to_owned()
        }
    };

    if item.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(item)
}
