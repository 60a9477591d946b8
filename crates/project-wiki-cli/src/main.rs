use anyhow::{Context, Result, anyhow, bail};
use dioxus::dioxus_core::VirtualDom;
use project_wiki_config::Config;
use project_wiki_dioxus::ui::{WikiCard, WikiCardProps};
use project_wiki_engine::{BASE_LANG, Project, ProjectCatalog, data, normalize_lang, read_project};
use std::{env, path::PathBuf, process};

/// Where the project to render comes from
#[derive(Debug, PartialEq)]
enum Source {
    File(PathBuf),
    Id(String),
    Example,
}

#[derive(Debug, PartialEq)]
enum Command {
    Render { source: Source, page: bool },
    /// Write a config file pointing at a projects folder
    Init(PathBuf),
}

#[derive(Debug, PartialEq)]
struct Args {
    command: Command,
    lang: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut source = None;
    let mut init = None;
    let mut lang = None;
    let mut page = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                lang = Some(args.next().ok_or_else(|| anyhow!("--lang needs a value"))?);
            }
            "--id" => {
                let id = args.next().ok_or_else(|| anyhow!("--id needs a value"))?;
                source = Some(Source::Id(id));
            }
            "--init" => {
                let path = args.next().ok_or_else(|| anyhow!("--init needs a projects path"))?;
                init = Some(PathBuf::from(path));
            }
            "--example" => source = Some(Source::Example),
            "--page" => page = true,
            flag if flag.starts_with("--") => bail!("Unknown option {flag}"),
            path => source = Some(Source::File(PathBuf::from(path))),
        }
    }

    let command = match (init, source) {
        (Some(_), Some(_)) => bail!("--init cannot be combined with a project"),
        (Some(projects_path), None) => Command::Init(projects_path),
        (None, Some(source)) => Command::Render { source, page },
        (None, None) => bail!("No project given"),
    };
    Ok(Args { command, lang })
}

fn load_project(source: &Source, config: Option<&Config>) -> Result<Project> {
    match source {
        Source::File(path) => read_project(path)
            .with_context(|| format!("Failed to read project {}", path.display())),
        Source::Example => Ok(data::example()),
        Source::Id(id) => {
            let config = config.ok_or_else(|| {
                anyhow!(
                    "--id needs a config file at {}",
                    Config::config_path().display()
                )
            })?;
            let catalog = ProjectCatalog::load(&config.projects_path)?;
            catalog
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("No project with id '{id}' in {}", config.projects_path.display()))
        }
    }
}

fn render_card(project: Project, lang: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        WikiCard,
        WikiCardProps {
            project,
            lang: lang.to_string(),
            class: String::new(),
            on_navigate: None,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn wrap_page(title: &str, lang: &str, body: &str) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn init_config(projects_path: PathBuf, lang: Option<&str>) -> Config {
    let mut config = Config::new(projects_path);
    if let Some(lang) = lang {
        config.default_lang = normalize_lang(lang).to_string();
    }
    config
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let (source, page) = match args.command {
        Command::Init(projects_path) => {
            let config = init_config(projects_path, args.lang.as_deref());
            config.save()?;
            log::info!("Wrote config to {}", Config::config_path().display());
            println!("{}", Config::config_path().display());
            return Ok(());
        }
        Command::Render { source, page } => (source, page),
    };

    let config = Config::load()?;
    let lang = args
        .lang
        .clone()
        .or_else(|| config.as_ref().map(|config| config.default_lang.clone()))
        .unwrap_or_else(|| BASE_LANG.to_string());
    let lang = normalize_lang(&lang);

    let project = load_project(&source, config.as_ref())?;
    log::info!("Rendering wiki card for '{}' in {lang}", project.id);

    let name = project.name.clone();
    let card = render_card(project, lang);
    if page {
        print!("{}", wrap_page(&name, lang, &card));
    } else {
        println!("{card}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        let program_name = env::args()
            .next()
            .unwrap_or_else(|| "project-wiki-cli".to_string());
        eprintln!("Error: {e:#}");
        eprintln!(
            "Usage: {program_name} <project.json | --id <project-id> | --example> [--lang <code>] [--page]\n       {program_name} --init <projects-folder-path> [--lang <code>]"
        );
        process::exit(1);
    }
}
