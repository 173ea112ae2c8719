// src/tools/catalog/system.rs
// Local CLI housekeeping: config, env, cache, doctor, completion, version,
// plugins.

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{boolean, choice, string, CONFIG_DIR};
use crate::tools::registry::ToolHandler;
use crate::tools::render::Render;

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_config_dir",
            "Show the location of the config directory",
            &[Word::Lit("config"), Word::Lit("dir")],
        )
        .params(&[CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_config_migrate",
            "Migrate the local config to the global config directory",
            &[Word::Lit("config"), Word::Lit("migrate")],
        )
        .params(&[CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_env",
            "Print environment variables the CLI reads, or one of them",
            &[Word::Lit("env"), Word::Slot("name")],
        )
        .params(&[
            string("name", "Variable to print (e.g. STELLAR_NETWORK)"),
            CONFIG_DIR,
        ])
        .into(),
        CliTool::new(
            "stellar_cache_clean",
            "Delete the cache",
            &[Word::Lit("cache"), Word::Lit("clean")],
        )
        .into(),
        CliTool::new(
            "stellar_cache_path",
            "Show the location of the cache",
            &[Word::Lit("cache"), Word::Lit("path")],
        )
        .into(),
        CliTool::new(
            "stellar_cache_actionlog_list",
            "List cached actions",
            &[Word::Lit("cache"), Word::Lit("actionlog"), Word::Lit("ls")],
        )
        .params(&[boolean("long", "Show more detail"), CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_cache_actionlog_read",
            "Read a cached action",
            &[Word::Lit("cache"), Word::Lit("actionlog"), Word::Lit("read")],
        )
        .params(&[string("id", "ID of the cache entry")])
        .required(&["id"])
        .into(),
        CliTool::new(
            "stellar_doctor",
            "Diagnose the CLI environment",
            &[Word::Lit("doctor")],
        )
        .params(&[CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_completion",
            "Print shell completion code",
            &[Word::Lit("completion")],
        )
        .params(&[choice(
            "shell",
            &["bash", "elvish", "fish", "powershell", "zsh"],
            "Target shell",
        )])
        .required(&["shell"])
        .render(Render::Completion)
        .action("generating shell completion")
        .into(),
        CliTool::new(
            "stellar_version",
            "Print version information",
            &[Word::Lit("version")],
        )
        .params(&[
            boolean("onlyVersion", "Print only the version number"),
            boolean("onlyVersionMajor", "Print only the major version number"),
        ])
        .render(Render::Version)
        .action("getting version")
        .into(),
        CliTool::new(
            "stellar_plugin_search",
            "Search for CLI plugins",
            &[Word::Lit("plugin"), Word::Lit("search")],
        )
        .render(Render::PluginSearch)
        .action("searching for plugins")
        .into(),
        CliTool::new(
            "stellar_plugin_list",
            "List installed CLI plugins",
            &[Word::Lit("plugin"), Word::Lit("ls")],
        )
        .render(Render::PluginList)
        .action("listing plugins")
        .into(),
    ]
}
