use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use vuedoc_md::logger::init_logger;
use vuedoc_md::{Feature, Features, JsonComponentParser, MarkdownRenderer, RenderConfig};

fn cli() -> Command {
    Command::new("vuedoc-md")
        .about("Render Vue component metadata as Markdown")
        .arg(
            Arg::new("input")
                .help("Component metadata JSON files produced by the component parser")
                .required(true)
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("level")
                .short('l')
                .long("level")
                .help("Heading level of the main title (clamped to 6)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("features")
                .short('f')
                .long("features")
                .help("Comma-separated list of features to render")
                .value_delimiter(','),
        )
        .arg(
            Arg::new("ignore")
                .long("ignore")
                .help("Feature to leave out of the output")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ignore-name")
                .long("ignore-name")
                .help("Do not render the main title")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-description")
                .long("ignore-description")
                .help("Do not render the component description")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("show-empty-sections")
                .long("show-empty-sections")
                .help("Render section titles even when a section has no entries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON file with default render options")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write one <name>.md per input into this directory")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))
}

/// Builds the render configuration, letting flags override the config file.
fn build_config(matches: &ArgMatches) -> Result<RenderConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };

    if let Some(level) = matches.get_one::<usize>("level") {
        config.level = *level;
    }

    if let Some(names) = matches.get_many::<String>("features") {
        config.features = Features::from_names(names);
    }

    let mut ignored: Vec<Feature> = Vec::new();
    if let Some(names) = matches.get_many::<String>("ignore") {
        ignored.extend(Features::from_names(names).iter());
    }
    if matches.get_flag("ignore-name") {
        ignored.push(Feature::Name);
    }
    if matches.get_flag("ignore-description") {
        ignored.push(Feature::Description);
    }
    for feature in ignored {
        config.features = config.features.without(feature);
    }

    if matches.get_flag("show-empty-sections") {
        config.show_empty_sections = true;
    }

    Ok(config)
}

fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "component".to_string());
    dir.join(format!("{}.md", stem))
}

/// Maps every input to its output file, refusing inputs that would share one.
fn output_paths(dir: &Path, inputs: &[&PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    let mut paths = Vec::with_capacity(inputs.len());

    for input in inputs {
        let path = output_path(dir, input);
        if let Some(previous) = seen.insert(path.clone(), input.as_path()) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                path.display()
            );
        }
        paths.push(path);
    }

    Ok(paths)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    init_logger(matches.get_flag("verbose"), matches.get_flag("quiet"));

    let config = build_config(&matches)?;
    let renderer = MarkdownRenderer::new(config);
    let parser = JsonComponentParser::new();

    let inputs: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("input")
        .map(|values| values.collect())
        .unwrap_or_default();

    let output_files = match matches.get_one::<PathBuf>("output") {
        Some(dir) => {
            let paths = output_paths(dir, &inputs)?;
            fs::create_dir_all(dir).with_context(|| {
                format!("failed to create output directory {}", dir.display())
            })?;
            Some(paths)
        }
        None => None,
    };

    let mut documents: Vec<String> = Vec::new();
    for (index, input) in inputs.iter().enumerate() {
        let doc = parser.parse_file(input)?;
        let markdown = renderer.render(&doc);

        match &output_files {
            Some(paths) => {
                let path = &paths[index];
                fs::write(path, &markdown)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote {}", path.display());
            }
            None => documents.push(markdown),
        }
    }

    if !documents.is_empty() {
        print!("{}", documents.join("\n"));
    }

    Ok(())
}
