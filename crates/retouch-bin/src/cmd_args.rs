/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{AFTER_HELP, OVERWRITE_HELP, SCRIPT_HELP, STRICT_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("retouch")
        .about("Load, edit and save images through a small command script")
        .after_help(AFTER_HELP)
        .arg(Arg::new("script")
            .short('s')
            .long("script")
            .help("Script file to read commands from, defaults to stdin")
            .long_help(SCRIPT_HELP)
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat most warnings as errors")
            .long_help(STRICT_HELP))
        .arg(Arg::new("overwrite")
            .short('y')
            .long("overwrite")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Overwrite existing files when saving")
            .long_help(OVERWRITE_HELP))
}
