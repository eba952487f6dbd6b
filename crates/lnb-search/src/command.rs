//! Argument vectors for the search executable.

use tracing::debug;

use crate::config::{LatticeSearch, LatticeType, NetConstruction, NetSearch, Search, SearchConfig};

fn push(command: &mut Vec<String>, flag: &str, value: impl Into<String>) {
    command.push(flag.to_string());
    command.push(value.into());
}

fn output_format(config: &SearchConfig) -> String {
    format!("file:{},format:gui", config.side_file.display())
}

fn lattice_arguments(config: &SearchConfig, lattice: &LatticeSearch, command: &mut Vec<String>) {
    let lattice_type = match lattice.lattice_type {
        LatticeType::Ordinary => "ordinary",
        LatticeType::Polynomial => "polynomial",
    };
    push(command, "--set-type", "lattice");
    push(command, "--construction", lattice_type);
    push(command, "--multilevel", lattice.embedded.to_string());
    push(command, "--modulus", lattice.modulus.as_str());
    push(command, "--figure-of-merit", lattice.figure_of_merit.as_str());
    push(command, "--norm-type", lattice.norm_type.as_str());
    push(command, "--exploration-method", lattice.exploration_method.as_str());
    push(command, "--weights-power", lattice.weights_power.to_string());
    push(command, "--verbose", "1");
    push(command, "--dimension", lattice.dimension.to_string());
    command.push("--weights".to_string());
    command.extend(lattice.weights.iter().cloned());
    if !lattice.filters.is_empty() {
        command.push("--filters".to_string());
        command.extend(lattice.filters.iter().cloned());
    }
    if !lattice.multilevel_filters.is_empty() {
        command.push("--multilevel-filters".to_string());
        command.extend(lattice.multilevel_filters.iter().cloned());
    }
    if let Some(combiner) = &lattice.combiner {
        push(command, "--combiner", combiner.as_str());
    }
    if lattice.lattice_type == LatticeType::Polynomial {
        push(command, "--output-format", output_format(config));
    }
}

fn net_arguments(config: &SearchConfig, net: &NetSearch, command: &mut Vec<String>) {
    let construction = match net.construction {
        NetConstruction::Sobol => "sobol",
        NetConstruction::Explicit => "explicit",
        NetConstruction::Polynomial => "polynomial",
    };
    push(command, "--set-type", "net");
    push(command, "--construction", construction);
    push(command, "--size", net.size.as_str());
    push(command, "--exploration-method", net.exploration_method.as_str());
    push(command, "--dimension", net.dimension.to_string());
    push(command, "--verbose", "2");
    push(command, "--output-format", output_format(config));
    for filter in &net.filters {
        push(command, "--add-figure", filter.as_str());
    }
    let figure = [
        net.figure_of_merit.clone(),
        "1".to_string(),
        net.figure_power.clone(),
        net.weights.join(" "),
        net.weights_power.to_string(),
    ]
    .join("/");
    push(command, "--add-figure", figure);
    if let Some(combiner) = &net.combiner {
        push(command, "--combiner", combiner.as_str());
    }
}

/// Full argument vector, executable first.
pub fn command_line(config: &SearchConfig) -> Vec<String> {
    let mut command = vec![config.executable.clone()];
    match &config.search {
        Search::Lattice(lattice) => lattice_arguments(config, lattice, &mut command),
        Search::Net(net) => net_arguments(config, net, &mut command),
    }
    debug!(family = %config.family(), args = command.len(), "assembled command line");
    command
}
