use dioxus::prelude::*;
use project_wiki_config::Config;
use project_wiki_engine::{BASE_LANG, ProjectCatalog, normalize_lang};
use project_wiki_dioxus::ui::{App, Startup};
use std::env;
use std::path::PathBuf;
use std::process;

fn usage_and_exit(config_path: &std::path::Path) -> ! {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "project-wiki-dioxus".to_string());
    eprintln!("Usage: {program_name} [projects-folder-path] [--lang <code>]");
    eprintln!("Or create a config file at {}", config_path.display());
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("project-wiki starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            usage_and_exit(&config_path);
        }
    };

    let mut projects_path = None;
    let mut lang = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => match args.next() {
                Some(code) => lang = Some(code),
                None => usage_and_exit(&config_path),
            },
            _ if projects_path.is_none() && !arg.starts_with("--") => {
                projects_path = Some(PathBuf::from(&arg));
            }
            _ => usage_and_exit(&config_path),
        }
    }

    let projects_path = match projects_path {
        Some(path) => {
            log::info!("Using projects path from CLI argument: {}", path.display());
            path
        }
        None => match &config {
            Some(config) => {
                log::info!(
                    "Loaded projects path from config: {}",
                    config.projects_path.display()
                );
                config.projects_path.clone()
            }
            None => {
                eprintln!("Error: No projects path provided and no config file found");
                usage_and_exit(&config_path);
            }
        },
    };

    let lang = lang
        .or_else(|| config.as_ref().map(|config| config.default_lang.clone()))
        .unwrap_or_else(|| BASE_LANG.to_string());
    let lang = normalize_lang(&lang).to_string();

    let catalog = match ProjectCatalog::load(&projects_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!(
                "Error: Projects path '{}' is invalid: {e}",
                projects_path.display()
            );
            process::exit(1);
        }
    };

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(Startup { catalog, lang })
        .launch(app_root);
}

fn app_root() -> Element {
    let startup = use_context::<Startup>();

    rsx! {
        App { startup }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("project-wiki")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
