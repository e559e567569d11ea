//! Line-based prompts. Invalid answers re-prompt in place; end of input is an error.

use anyhow::{bail, Result};
use rcd_core::batch::{BatchRequest, CategorySelection};
use rcd_core::listing::TimeWindow;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

const BANNER: &str = "Reddit Content Downloader\nHint: you can combine subreddits like r/gifs+funny\n";

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before all questions were answered");
    }
    Ok(line.trim().to_string())
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    read_answer(input)
}

/// Subreddit name; a leading `r/` is accepted and stripped.
pub fn prompt_collection<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    loop {
        let answer = ask(input, out, "Subreddit: r/")?;
        let name = answer.strip_prefix("r/").unwrap_or(&answer).trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        writeln!(out, "  A subreddit name is required")?;
    }
}

/// Any answer containing `y` is yes; otherwise any containing `n` is no.
pub fn prompt_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    loop {
        let answer = ask(input, out, question)?.to_lowercase();
        if answer.contains('y') {
            return Ok(true);
        }
        if answer.contains('n') {
            return Ok(false);
        }
        writeln!(out, "Invalid input. Please type y or n")?;
    }
}

fn window_adjective(window: TimeWindow) -> &'static str {
    match window {
        TimeWindow::Hour => "hourly",
        TimeWindow::Day => "daily",
        TimeWindow::Week => "weekly",
        TimeWindow::Month => "monthly",
        TimeWindow::Year => "yearly",
        TimeWindow::All => "all-time",
    }
}

pub fn prompt_count<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    window: TimeWindow,
) -> Result<NonZeroUsize> {
    let question = format!(
        "\n# of top {} posts to download: ",
        window_adjective(window)
    );
    loop {
        let answer = ask(input, out, &question)?;
        match answer.parse::<i64>() {
            Ok(n) if n <= 0 => writeln!(out, "  At least 1 post needs to be downloaded")?,
            Ok(n) => {
                if let Some(count) = usize::try_from(n).ok().and_then(NonZeroUsize::new) {
                    return Ok(count);
                }
                writeln!(out, "  A positive integer (1, 2, etc.) was not given")?;
            }
            Err(_) => writeln!(out, "  A positive integer (1, 2, etc.) was not given")?,
        }
    }
}

/// Full prompt sequence: subreddit, pictures?, gifs?, videos?, count.
pub fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    window: TimeWindow,
) -> Result<BatchRequest> {
    writeln!(out, "{BANNER}")?;
    let collection = prompt_collection(input, out)?;
    let selection = CategorySelection {
        pictures: prompt_yes_no(input, out, "  Download pictures? (y/n): ")?,
        gifs: prompt_yes_no(input, out, "  Download gifs? (y/n): ")?,
        videos: prompt_yes_no(input, out, "  Download videos? (y/n): ")?,
    };
    let count = prompt_count(input, out, window)?;
    Ok(BatchRequest {
        collection,
        selection,
        count,
    })
}
