// src/tools/reports.rs
//! Readable reports for subcommands whose output is prose: `version`,
//! `completion`, `plugin search` and `plugin ls`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VERSION: Regex =
        Regex::new(r"(?i)stellar(?:[-\s]+cli)?(?:[-\s]+)?v?(\d+\.\d+\.\d+)").unwrap();
    static ref COMMIT: Regex = Regex::new(r"(?i)commit[:\s]+([a-f0-9]{7,40})").unwrap();
    static ref BUILT: Regex = Regex::new(r"(?i)built[:\s]+([^\n]+)").unwrap();
    static ref RUST: Regex = Regex::new(r"(?i)rust[:\s]+([^\n]+)").unwrap();
    static ref TARGET: Regex = Regex::new(r"(?i)target[:\s]+([^\n]+)").unwrap();
    static ref PLUGIN_WITH_STATUS: Regex = Regex::new(r"^(.+?)\s+v?([\d.]+)\s*\((\w+)\)").unwrap();
    static ref PLUGIN_WITH_VERSION: Regex = Regex::new(r"^(.+?)\s*\(version:\s*([\d.]+)\)").unwrap();
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: Option<String>,
    pub git_commit: Option<String>,
    pub build_date: Option<String>,
    pub rust_version: Option<String>,
    pub platform: Option<String>,
}

pub fn parse_version(output: &str) -> VersionInfo {
    VersionInfo {
        version: capture(&VERSION, output),
        git_commit: capture(&COMMIT, output),
        build_date: capture(&BUILT, output),
        rust_version: capture(&RUST, output),
        platform: capture(&TARGET, output),
    }
}

pub fn version_report(output: &str, only_version: bool, only_major: bool) -> String {
    let output = output.trim();
    if only_major && !output.is_empty() {
        return format!("Major version: {}", output);
    }
    if only_version && !output.is_empty() {
        return format!("Version: {}", output);
    }
    if output.is_empty() {
        return "Version information not available".to_string();
    }

    let info = parse_version(output);
    let mut lines = vec!["Stellar CLI Version Information:".to_string(), String::new()];
    let fields = [
        ("Version", &info.version),
        ("Git Commit", &info.git_commit),
        ("Build Date", &info.build_date),
        ("Rust Version", &info.rust_version),
        ("Platform", &info.platform),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines.extend([
        String::new(),
        "Full Output:".to_string(),
        "```".to_string(),
        output.to_string(),
        "```".to_string(),
    ]);
    lines.join("\n")
}

pub fn shell_instructions(shell: &str) -> &'static str {
    match shell {
        "bash" => "To enable: source <(stellar completion --shell bash)\nOr add to ~/.bashrc for permanent setup",
        "zsh" => "To enable: source <(stellar completion --shell zsh)\nOr add to ~/.zshrc for permanent setup",
        "fish" => "To enable: stellar completion --shell fish > ~/.config/fish/completions/stellar.fish",
        "powershell" => "To enable: stellar completion --shell powershell | Out-String | Invoke-Expression\nOr add to $PROFILE for permanent setup",
        "elvish" => "To enable: stellar completion --shell elvish > ~/.elvish/lib/stellar-completion.elv",
        _ => "",
    }
}

pub fn completion_report(shell: &str, script: &str) -> String {
    let mut lines = vec![
        format!("Shell completion code for {}:\n", shell),
        format!("```{}", shell),
        script.to_string(),
        "```\n".to_string(),
    ];
    let instructions = shell_instructions(shell);
    if !instructions.is_empty() {
        lines.push("Setup Instructions:".to_string());
        lines.push(instructions.to_string());
    }
    lines.join("\n")
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: String,
    pub description: Option<String>,
    pub repository: Option<String>,
    pub stars: Option<u64>,
    pub author: Option<String>,
    pub url: Option<String>,
}

fn field(line: &str, label: &str) -> Option<String> {
    line.find(label)
        .map(|at| line[at + label.len()..].trim().to_string())
}

pub fn parse_plugin_search(output: &str) -> Vec<PluginInfo> {
    let mut plugins = Vec::new();
    let mut current: Option<PluginInfo> = None;

    for line in output.lines() {
        if line.contains("stellar-") || line.contains("soroban-") {
            if let Some(done) = current.take() {
                plugins.push(done);
            }
            current = Some(PluginInfo {
                name: line.trim().to_string(),
                ..Default::default()
            });
            continue;
        }
        let Some(plugin) = current.as_mut() else {
            continue;
        };
        if let Some(v) = field(line, "Description:") {
            plugin.description = Some(v);
        } else if let Some(v) = field(line, "Repository:") {
            plugin.repository = Some(v);
        } else if let Some(v) = field(line, "Stars:") {
            plugin.stars = v.parse().ok();
        } else if let Some(v) = field(line, "Author:") {
            plugin.author = Some(v);
        } else if let Some(v) = field(line, "URL:") {
            plugin.url = Some(v);
        }
    }
    if let Some(done) = current {
        plugins.push(done);
    }

    // Unstructured output: one plugin per line.
    if plugins.is_empty() {
        plugins = output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with("Searching") && !l.starts_with("Found"))
            .map(|l| PluginInfo {
                name: l.to_string(),
                ..Default::default()
            })
            .collect();
    }
    plugins
}

pub fn plugin_search_report(output: &str) -> String {
    let plugins = parse_plugin_search(output);
    if plugins.is_empty() {
        return "No plugins found. Try searching on GitHub for Stellar CLI plugins.".to_string();
    }

    let mut lines = vec![format!("Found {} plugin(s):\n", plugins.len())];
    for plugin in &plugins {
        lines.push(format!("**{}**", plugin.name));
        if let Some(d) = &plugin.description {
            lines.push(format!("  Description: {}", d));
        }
        if let Some(r) = &plugin.repository {
            lines.push(format!("  Repository: {}", r));
        }
        if let Some(s) = plugin.stars {
            lines.push(format!("  Stars: {}", s));
        }
        if let Some(a) = &plugin.author {
            lines.push(format!("  Author: {}", a));
        }
        if let Some(u) = &plugin.url {
            lines.push(format!("  URL: {}", u));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

#[derive(Debug, PartialEq, Eq)]
pub struct InstalledPlugin {
    pub name: String,
    pub version: Option<String>,
    pub status: String,
}

pub fn parse_plugin_list(output: &str) -> Vec<InstalledPlugin> {
    output
        .lines()
        .filter(|l| {
            !l.trim().is_empty() && !l.starts_with("Installed plugins:") && !l.starts_with("No plugins")
        })
        .map(|line| {
            if let Some(c) = PLUGIN_WITH_STATUS.captures(line) {
                InstalledPlugin {
                    name: c[1].trim().to_string(),
                    version: Some(c[2].to_string()),
                    status: c[3].to_string(),
                }
            } else if let Some(c) = PLUGIN_WITH_VERSION.captures(line) {
                InstalledPlugin {
                    name: c[1].trim().to_string(),
                    version: Some(c[2].to_string()),
                    status: "active".to_string(),
                }
            } else {
                InstalledPlugin {
                    name: line.trim().to_string(),
                    version: None,
                    status: "active".to_string(),
                }
            }
        })
        .collect()
}

pub fn plugin_list_report(output: &str) -> String {
    let plugins = parse_plugin_list(output);
    if plugins.is_empty() {
        return "No plugins installed. Use `stellar plugin search` to find available plugins."
            .to_string();
    }

    let mut lines = vec![format!("Installed plugins ({}):\n", plugins.len())];
    for plugin in &plugins {
        let mut line = format!("• {}", plugin.name);
        if let Some(v) = &plugin.version {
            line.push_str(&format!(" v{}", v));
        }
        let icon = match plugin.status.as_str() {
            "active" => "✓",
            "error" => "✗",
            _ => "-",
        };
        line.push_str(&format!(" [{} {}]", icon, plugin.status));
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_fields_are_extracted() {
        let out = "stellar 22.0.1 (a1b2c3d4e5f6)\nstellar-xdr 22.0.0\ncommit: 0123abc\ntarget: x86_64-unknown-linux-gnu\n";
        let info = parse_version(out);
        assert_eq!(info.version.as_deref(), Some("22.0.1"));
        assert_eq!(info.git_commit.as_deref(), Some("0123abc"));
        assert_eq!(info.platform.as_deref(), Some("x86_64-unknown-linux-gnu"));
        assert_eq!(info.build_date, None);

        let report = version_report(out, false, false);
        assert!(report.starts_with("Stellar CLI Version Information:"));
        assert!(report.contains("Version: 22.0.1"));
        assert!(report.ends_with("```"));
    }

    #[test]
    fn short_version_forms() {
        assert_eq!(version_report("22.0.1\n", true, false), "Version: 22.0.1");
        assert_eq!(version_report("22", false, true), "Major version: 22");
        assert_eq!(version_report("", false, false), "Version information not available");
    }

    #[test]
    fn completion_has_instructions_for_known_shells() {
        let report = completion_report("zsh", "#compdef stellar");
        assert!(report.contains("```zsh\n#compdef stellar\n```"));
        assert!(report.contains("~/.zshrc"));
        assert!(!completion_report("nushell", "x").contains("Setup Instructions:"));
    }

    #[test]
    fn plugin_search_structured_and_plain() {
        let out = "stellar-scaffold\n  Description: Scaffolding\n  Stars: 42\nsoroban-fmt\n";
        let plugins = parse_plugin_search(out);
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].description.as_deref(), Some("Scaffolding"));
        assert_eq!(plugins[0].stars, Some(42));

        let plain = parse_plugin_search("Searching...\nfoo\nbar\n");
        assert_eq!(plain.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["foo", "bar"]);
        assert!(plugin_search_report("").starts_with("No plugins found"));
    }

    #[test]
    fn plugin_list_formats() {
        let out = "Installed plugins:\nstellar-hello v1.2.0 (active)\nstellar-bye (version: 0.3.1)\nstellar-plain\n";
        let plugins = parse_plugin_list(out);
        assert_eq!(plugins.len(), 3);
        assert_eq!(plugins[0].version.as_deref(), Some("1.2.0"));
        assert_eq!(plugins[1].status, "active");
        assert_eq!(plugins[2].version, None);

        let report = plugin_list_report(out);
        assert!(report.contains("• stellar-hello v1.2.0 [✓ active]"));
    }
}
