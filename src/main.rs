//! CLI entry point for bough

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use bough::{RenderConfig, TreeRenderer, VolumeInfo, has_subdirectories};

const USAGE: &str = "Graphically displays the folder structure of a drive or path.\n\n\
                     BOUGH [path] [/F] [/A]\n\n\
                     \x20  /F   Display the names of the files in each folder.\n\
                     \x20  /A   Use ASCII instead of extended characters.\n\n";

/// Parsed command line.
struct Cli {
    config: RenderConfig,
    path: Option<PathBuf>,
}

enum CliAction {
    Run(Cli),
    Usage,
    TooManyParameters(String),
}

/// Windows-style switch parsing: `/X` and `-X` both work, switch letters
/// are case-insensitive, and unrecognized switches are ignored the way
/// `tree.com` ignores them.
fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut config = RenderConfig::default();
    let mut path = None;

    for arg in args {
        if let Some(switch) = arg.strip_prefix(['/', '-']) {
            match switch.chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('?') => return CliAction::Usage,
                Some('f') => config.show_files = true,
                Some('a') => config.use_ascii = true,
                _ => {}
            }
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return CliAction::TooManyParameters(arg);
        }
    }

    CliAction::Run(Cli { config, path })
}

fn main() {
    let cli = match parse_args(std::env::args().skip(1)) {
        CliAction::Run(cli) => cli,
        CliAction::Usage => {
            eprint!("{USAGE}");
            return;
        }
        CliAction::TooManyParameters(arg) => {
            eprintln!("Too many parameters - {arg}\n");
            return;
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("bough: error writing output: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Header line: the absolute target when a path was given, otherwise
    // the current-directory shorthand.
    let (root, header) = match cli.path {
        Some(path) => {
            let abs = std::path::absolute(&path).unwrap_or_else(|_| cwd.join(&path));
            let header = abs.display().to_string();
            (abs, header)
        }
        None => (cwd.clone(), ".".to_string()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The banner goes out before the path is validated, like tree.com.
    VolumeInfo::for_path(&cwd).write_banner(&mut out)?;
    writeln!(out, "{header}")?;

    if !root.is_dir() {
        out.flush()?;
        eprintln!("Invalid path - {}", root.display());
        eprintln!("No subfolders exist\n");
        return Ok(());
    }

    TreeRenderer::new(cli.config).draw(&root, &mut out)?;
    out.flush()?;

    if !has_subdirectories(&root) {
        eprintln!("No subfolders exist\n");
    }

    Ok(())
}
