use crate::config::{Command, ListArgs, WrapArgs};
use crate::conf::TwConf;
use crate::errors::AppResult;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input, from `file` if given, otherwise stdin.
pub fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Runs one subcommand, reading its input and writing the result to `out`.
pub fn execute_command<W: Write + ?Sized>(
    conf: &TwConf,
    command: &Command,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Command::Wrap(args) => {
            let text = read_input(args.file.as_deref())?;
            wrap_text(conf, args, &text, out)
        }
        Command::List(args) => {
            let text = read_input(args.file.as_deref())?;
            list_lines(conf, args, &text, out)
        }
    }
}

pub fn wrap_text<W: Write + ?Sized>(
    conf: &TwConf,
    args: &WrapArgs,
    text: &str,
    out: &mut W,
) -> AppResult<()> {
    // A trailing newline ends the last line rather than starting a new paragraph
    let text = text.strip_suffix('\n').unwrap_or(text);

    if let Some(ref prefix) = args.prefix {
        conf.wrap_prefixed(out, prefix, text, args.indent)?;
        return Ok(());
    }

    let first = args.first_indent.unwrap_or(args.indent);
    let para_first = args.para_indent.unwrap_or(first);
    let other = args.other_indent.unwrap_or(args.indent);
    conf.wrap_3_indent(out, text, first, para_first, other)?;
    Ok(())
}

pub fn list_lines<W: Write + ?Sized>(
    conf: &TwConf,
    args: &ListArgs,
    text: &str,
    out: &mut W,
) -> AppResult<()> {
    let entries: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    match (args.numbered, args.no_repeat, args.paths) {
        (false, false, _) => conf.list(out, &entries, args.indent)?,
        (true, false, _) => conf.idx_list(out, &entries, args.indent)?,
        (false, true, false) => conf.no_rpt_list(out, &entries, args.indent)?,
        (true, true, false) => conf.idx_no_rpt_list(out, &entries, args.indent)?,
        (false, true, true) => conf.no_rpt_path_list(out, &entries, args.indent)?,
        (true, true, true) => conf.idx_no_rpt_path_list(out, &entries, args.indent)?,
    }
    Ok(())
}
