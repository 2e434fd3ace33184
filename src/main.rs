use std::path::PathBuf;

use word_atlas::FontAtlas;
use word_atlas::config::{Config, config_path};

/// What to do with the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Render,
    Measure,
    MinWidth,
}

#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    width: Option<u32>,
    out: PathBuf,
    mode: Mode,
    text: String,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--print-config") {
        match Config::default().to_toml() {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("wordatlas {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let result = parse_args(&args).and_then(|opts| run(&opts));
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_help() {
    println!("wordatlas {}", env!("CARGO_PKG_VERSION"));
    println!("Render text to a PNG with word wrapping\n");
    println!("USAGE:");
    println!("    wordatlas [OPTIONS] TEXT...\n");
    println!("OPTIONS:");
    println!("    --config FILE     Read configuration from FILE");
    println!("    --width PX        Wrap lines to stay below PX pixels");
    println!("    --out FILE        Output PNG path (default: text.png)");
    println!("    --measure         Print the wrapped size instead of rendering");
    println!("    --min-width       Print the width of the widest word");
    println!("    --print-config    Print the default configuration to stdout");
    println!("    --version, -V     Print version information");
    println!("    --help, -h        Print this help message");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        config: None,
        width: None,
        out: PathBuf::from("text.png"),
        mode: Mode::Render,
        text: String::new(),
    };
    let mut words = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => opts.config = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--out" => opts.out = PathBuf::from(value(&mut iter, arg)?),
            "--width" => {
                let v = value(&mut iter, arg)?;
                let px = v
                    .parse::<u32>()
                    .map_err(|e| format!("invalid --width {v:?}: {e}"))?;
                opts.width = Some(px);
            }
            "--measure" => opts.mode = Mode::Measure,
            "--min-width" => opts.mode = Mode::MinWidth,
            s if s.starts_with("--") => return Err(format!("unknown option {s}")),
            s => words.push(s),
        }
    }
    if words.is_empty() {
        return Err("no text given (see --help)".to_owned());
    }
    opts.text = words.join(" ");
    Ok(opts)
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn run(opts: &Options) -> Result<(), String> {
    let config = match &opts.config {
        Some(path) => Config::load_from(path).map_err(|e| e.to_string())?,
        None => Config::load_or_default(&config_path()),
    };
    let max_width = opts.width.or(config.text.max_width);
    let mut atlas = FontAtlas::from_config(&config).map_err(|e| e.to_string())?;

    match opts.mode {
        Mode::Measure => {
            let size = atlas
                .measure(&opts.text, max_width)
                .map_err(|e| e.to_string())?;
            println!("{}x{}", size.width, size.height);
        }
        Mode::MinWidth => {
            let width = atlas.minimum_width(&opts.text).map_err(|e| e.to_string())?;
            println!("{width}");
        }
        Mode::Render => {
            let canvas = atlas
                .render_text(&opts.text, max_width)
                .map_err(|e| e.to_string())?;
            if canvas.width() == 0 {
                return Err("nothing to render".to_owned());
            }
            canvas.save_png(&opts.out).map_err(|e| e.to_string())?;
            log::info!(
                "wrote {}x{} to {}",
                canvas.width(),
                canvas.height(),
                opts.out.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn text_words_are_joined() {
        let opts = parse_args(&args(&["hello", "world"])).expect("parse");
        assert_eq!(opts.text, "hello world");
        assert_eq!(opts.mode, Mode::Render);
        assert_eq!(opts.out, PathBuf::from("text.png"));
        assert!(opts.width.is_none());
        assert!(opts.config.is_none());
    }

    #[test]
    fn options_are_parsed() {
        let opts = parse_args(&args(&[
            "--width", "120", "--out", "x.png", "--config", "c.toml", "--measure", "hi",
        ]))
        .expect("parse");
        assert_eq!(opts.width, Some(120));
        assert_eq!(opts.out, PathBuf::from("x.png"));
        assert_eq!(opts.config, Some(PathBuf::from("c.toml")));
        assert_eq!(opts.mode, Mode::Measure);
    }

    #[test]
    fn min_width_mode() {
        let opts = parse_args(&args(&["--min-width", "a", "bb"])).expect("parse");
        assert_eq!(opts.mode, Mode::MinWidth);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--width"])).is_err());
        assert!(parse_args(&args(&["--width", "wide", "x"])).is_err());
        assert!(parse_args(&args(&["--bogus", "x"])).is_err());
    }
}
