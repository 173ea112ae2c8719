// src/tools/catalog/container.rs

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{choice, number, string, Param};
use crate::tools::registry::ToolHandler;

const DOCKER_HOST: Param = string("dockerHost", "Docker host to connect to");
const NAME: Param = string("name", "Container name");

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_container_start",
            "Start a local Stellar network container",
            &[Word::Lit("container"), Word::Lit("start"), Word::Slot("network")],
        )
        .params(&[
            choice(
                "network",
                &["local", "testnet", "futurenet", "pubnet"],
                "Network to run",
            ),
            DOCKER_HOST,
            NAME,
            string("limits", "Resource limits for the local network"),
            string("portsMapping", "Port mapping, e.g. 8000:8000"),
            string("imageTagOverride", "Override the docker image tag"),
            number("protocolVersion", "Protocol version to start with"),
        ])
        .into(),
        CliTool::new(
            "stellar_container_stop",
            "Stop a running network container",
            &[Word::Lit("container"), Word::Lit("stop"), Word::Slot("name")],
        )
        .params(&[NAME, DOCKER_HOST])
        .into(),
        CliTool::new(
            "stellar_container_logs",
            "Print the logs of a network container",
            &[Word::Lit("container"), Word::Lit("logs"), Word::Slot("name")],
        )
        .params(&[NAME, DOCKER_HOST])
        .into(),
    ]
}
