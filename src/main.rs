//! themed-icon-manifest CLI
//!
//! Usage: themed-icon-manifest [OPTIONS]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use themed_icon_manifest::{CollisionPolicy, ManifestBuilder, ManifestConfig};

/// Generate a themed icon stylesheet and resource key class from an icon directory
#[derive(Parser, Debug)]
#[command(name = "themed-icon-manifest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to icon-manifest.config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory scanned for icon files
    #[arg(long)]
    root: Option<PathBuf>,

    /// Stylesheet output path
    #[arg(long)]
    css_out: Option<PathBuf>,

    /// Class source output path
    #[arg(long)]
    code_out: Option<PathBuf>,

    /// Name of the generated class
    #[arg(long)]
    class_name: Option<String>,

    /// Warn about clashing resource keys instead of failing
    #[arg(long)]
    allow_collisions: bool,

    /// Verify the outputs are up to date without writing them
    #[arg(long)]
    check: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<ManifestConfig> {
        let mut config = match &self.config {
            Some(path) => ManifestConfig::from_path(path)?,
            None => ManifestConfig::discover(&std::env::current_dir()?)?,
        };

        if let Some(root) = &self.root {
            config.root_dir = root.clone();
        }
        if let Some(css_out) = &self.css_out {
            config.css_output = css_out.clone();
        }
        if let Some(code_out) = &self.code_out {
            config.code_output = code_out.clone();
        }
        if let Some(class_name) = &self.class_name {
            config.class_name = class_name.clone();
        }
        if self.allow_collisions {
            config.on_collision = CollisionPolicy::Warn;
        }

        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

/// What a successful invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Both artifacts were written.
    Written,
    /// `--check` found both artifacts current.
    UpToDate,
    /// `--check` found at least one artifact out of date.
    Stale,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Written | Outcome::UpToDate => ExitCode::SUCCESS,
            Outcome::Stale => ExitCode::FAILURE,
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = cli.load_config().context("failed to load configuration")?;
    let builder = ManifestBuilder::new(&config);

    if cli.check {
        let artifacts = builder.build().context("failed to build icon manifest")?;
        let stale = artifacts.stale_paths()?;
        if stale.is_empty() {
            return Ok(Outcome::UpToDate);
        }
        for path in stale {
            eprintln!("out of date: {}", path.display());
        }
        return Ok(Outcome::Stale);
    }

    let artifacts = builder.run().context("failed to generate icon manifest")?;
    println!(
        "{} icon(s): wrote {} and {}",
        artifacts.entries.len(),
        artifacts.stylesheet.path.display(),
        artifacts.code.path.display()
    );
    Ok(Outcome::Written)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    use themed_icon_manifest::config::DEFAULT_CONFIG_FILE;

    /// Icon tree plus a config file sending output to `out/`.
    fn project(icons: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path().join("light/component");
        fs::create_dir_all(&root).unwrap();
        for icon in icons {
            fs::write(root.join(icon), "png").unwrap();
        }
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{
                "root_dir": "light/component",
                "css_output": "out/file.css",
                "code_output": "out/file.ts",
                "class_name": "FileResource"
            }"#,
        )
        .unwrap();
        dir
    }

    fn parse(dir: &Path, extra: &[&str]) -> Cli {
        let mut args: Vec<OsString> = vec![
            "themed-icon-manifest".into(),
            "--config".into(),
            dir.join(DEFAULT_CONFIG_FILE).into_os_string(),
        ];
        args.extend(extra.iter().map(OsString::from));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn config_file_values_apply_without_overrides() {
        let dir = project(&[]);
        let config = parse(dir.path(), &[]).load_config().unwrap();

        assert_eq!(config.root_dir, dir.path().join("light/component"));
        assert_eq!(config.css_output, dir.path().join("out/file.css"));
        assert_eq!(config.code_output, dir.path().join("out/file.ts"));
        assert_eq!(config.class_name, "FileResource");
        assert_eq!(config.on_collision, CollisionPolicy::Error);
    }

    #[test]
    fn flags_override_the_config_file() {
        let dir = project(&[]);
        let cli = parse(
            dir.path(),
            &[
                "--root",
                "icons",
                "--css-out",
                "cli.css",
                "--code-out",
                "cli.ts",
                "--class-name",
                "CliResource",
                "--allow-collisions",
                "-vv",
            ],
        );

        let config = cli.load_config().unwrap();

        assert_eq!(config.root_dir, Path::new("icons"));
        assert_eq!(config.css_output, Path::new("cli.css"));
        assert_eq!(config.code_output, Path::new("cli.ts"));
        assert_eq!(config.class_name, "CliResource");
        assert_eq!(config.on_collision, CollisionPolicy::Warn);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let cli = parse(dir.path(), &[]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn check_reports_stale_outputs_without_writing() {
        let dir = project(&["a.png"]);
        let cli = parse(dir.path(), &["--check"]);

        assert_eq!(run(&cli).unwrap(), Outcome::Stale);
        assert!(!dir.path().join("out/file.css").exists());
        assert!(!dir.path().join("out/file.ts").exists());
    }

    #[test]
    fn check_passes_after_generation() {
        let dir = project(&["a.png", "b.png"]);

        assert_eq!(run(&parse(dir.path(), &[])).unwrap(), Outcome::Written);
        assert_eq!(
            fs::read_to_string(dir.path().join("out/file.ts")).unwrap(),
            "export class FileResource { \n\
             \t public static A:string='a';\n\
             \t public static B:string='b';\n\
             }\n"
        );
        assert_eq!(
            run(&parse(dir.path(), &["--check"])).unwrap(),
            Outcome::UpToDate
        );
    }

    #[test]
    fn allow_collisions_lets_clashing_icons_through() {
        let dir = project(&["a.png", "a.svg"]);

        assert!(run(&parse(dir.path(), &[])).is_err());
        assert!(!dir.path().join("out/file.css").exists());

        assert_eq!(
            run(&parse(dir.path(), &["--allow-collisions"])).unwrap(),
            Outcome::Written
        );
        let css = fs::read_to_string(dir.path().join("out/file.css")).unwrap();
        assert_eq!(css.matches(".vs .a{").count(), 2);
    }
}
