use std::env;
use std::fs;
use std::process::ExitCode;

use py2pseudo::{convert_lines, ConvertOptions, Strictness};

fn usage(problem: &str) -> ExitCode {
    eprintln!("error: {problem}");
    eprintln!("usage: py2pseudo <source.py> [-o <out.txt>] [--strict] [--json]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut source: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut opts = ConvertOptions::default();
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--strict" => opts.strictness = Strictness::Strict,
            "--json" => json = true,
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => out_path = Some(path.clone()),
                    None => return usage("missing path after -o"),
                }
            }
            arg if arg.starts_with('-') => return usage(&format!("unknown flag {arg}")),
            arg => {
                if source.is_some() {
                    return usage("more than one source file");
                }
                source = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let Some(source) = source else {
        return usage("no source file");
    };

    let contents = match fs::read_to_string(&source) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("{source}: {err}");
            return ExitCode::from(1);
        }
    };
    let lines: Vec<&str> = contents.lines().collect();

    let conversion = match convert_lines(&lines, &opts) {
        Ok(conversion) => conversion,
        Err(err) => {
            eprintln!("{source}: {err}");
            return ExitCode::from(1);
        }
    };

    for diag in &conversion.diagnostics {
        log::warn!("{source}:{}: skipped unrecognized line: {}", diag.line, diag.text);
    }

    let rendered = if json {
        match serde_json::to_string_pretty(&conversion.lines) {
            Ok(text) => text + "\n",
            Err(err) => {
                eprintln!("{source}: {err}");
                return ExitCode::from(1);
            }
        }
    } else {
        let mut text = String::new();
        for line in &conversion.lines {
            text.push_str(&" ".repeat(line.indent));
            text.push_str(&line.content);
            text.push('\n');
        }
        text
    };

    match out_path {
        Some(path) => {
            if let Err(err) = fs::write(&path, rendered) {
                eprintln!("{path}: {err}");
                return ExitCode::from(1);
            }
        }
        None => print!("{rendered}"),
    }

    ExitCode::SUCCESS
}
