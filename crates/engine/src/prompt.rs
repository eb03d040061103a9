// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt construction for fix requests.

use std::fmt::Write as _;

use crate::model::FixRequest;

/// Render the prompt for one failed command.
pub fn render(request: &FixRequest) -> String {
    let cleaned = strip_ansi(request.transcript.as_bytes());
    let output = tail_chars(&cleaned, request.transcript_tail);

    let mut prompt = String::new();
    prompt.push_str("You are a helpful shell assistant.\n");
    prompt.push_str("The user ran this command and it failed:\n");
    let _ = writeln!(prompt, "Command: `{}`", request.command);
    let _ = writeln!(prompt, "Exit Code: {}", request.status.code());
    if let Some(signal) = request.status.signal() {
        let _ = writeln!(prompt, "Terminated by signal: {signal}");
    }
    let _ = writeln!(prompt, "Output/Error (last {} chars):", request.transcript_tail);
    prompt.push_str("```\n");
    prompt.push_str(output.trim_end_matches('\n'));
    prompt.push_str("\n```\n\n");
    prompt.push_str(
        "Provide ONLY the corrected shell command inside a ```bash``` code block. \
         Do not explain unless necessary. If the command was a typo, fix the typo.",
    );
    prompt
}

/// The last `max` characters of `text`.
pub fn tail_chars(text: &str, max: usize) -> &str {
    let count = text.chars().count();
    if count <= max {
        return text;
    }
    match text.char_indices().nth(count - max) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// Remove terminal control sequences, returning readable text.
///
/// Drops CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC \`) and
/// two-byte escapes, and folds `\r\n` to `\n`. Invalid UTF-8 is replaced.
pub fn strip_ansi(input: &[u8]) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            0x1B => {
                i += 1;
                match input.get(i) {
                    Some(b'[') => {
                        i += 1;
                        // Parameter and intermediate bytes, then one final byte
                        while i < input.len() && (0x20..=0x3F).contains(&input[i]) {
                            i += 1;
                        }
                        if i < input.len() && (0x40..=0x7E).contains(&input[i]) {
                            i += 1;
                        }
                    }
                    Some(b']') => {
                        i += 1;
                        while i < input.len() {
                            if input[i] == 0x07 {
                                i += 1;
                                break;
                            }
                            if input[i] == 0x1B && input.get(i + 1) == Some(&b'\\') {
                                i += 2;
                                break;
                            }
                            i += 1;
                        }
                    }
                    Some(_) => i += 1,
                    None => {}
                }
            }
            b'\r' if input.get(i + 1) == Some(&b'\n') => i += 1,
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
