use std::io::{self, BufRead, Write};

/// Writes `question`, reads one line and returns true only for `y` or `Y`
/// (surrounding whitespace ignored). End of input means no.
pub fn confirm<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    Ok(read_answer(input, output, question)?.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}

/// Like `confirm`, but only a lowercase `y` counts.
pub fn confirm_exact<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    Ok(read_answer(input, output, question)?.is_some_and(|a| a == "y"))
}

fn read_answer<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(answer.trim().to_string()))
}
