/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use retouch_core::options::DecoderOptions;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub script:         Option<PathBuf>,
    pub max_width:      usize,
    pub max_height:     usize,
    pub strict_mode:    bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let defaults = DecoderOptions::default();

        CmdOptions {
            script:         None,
            max_width:      defaults.get_max_width(),
            max_height:     defaults.get_max_height(),
            strict_mode:    false,
            override_files: false
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(script) = options.get_one::<PathBuf>("script") {
        info!("Reading commands from {:?}", script);
        cmd_options.script = Some(script.clone());
    }
    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }
    if options.value_source("overwrite") == Some(ValueSource::CommandLine) {
        info!("Existing files will be overwritten");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn flags_reach_decoder_options() {
        let matches = create_cmd_args().get_matches_from([
            "retouch",
            "--script",
            "edits.txt",
            "--max-width",
            "20",
            "--strict",
            "-y"
        ]);
        let options = parse_options(&matches);
        let decoder_options = options.decoder_options();

        assert_eq!(options.script.as_deref(), Some(std::path::Path::new("edits.txt")));
        assert!(options.override_files);
        assert_eq!(decoder_options.get_max_width(), 20);
        assert_eq!(decoder_options.get_max_height(), 1 << 14);
        assert!(decoder_options.get_strict_mode());
    }
}
