/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{stdin, stdout, BufReader};
use std::process::exit;

use log::{error, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::script::Interpreter;

mod cmd_args;
mod cmd_parsers;
mod script;
mod serde;

fn run_script(options: &CmdOptions) -> std::io::Result<()> {
    let mut interpreter = Interpreter::new(options, stdout().lock());

    match &options.script {
        Some(path) => {
            info!("Running script {:?}", path);
            interpreter.run(BufReader::new(File::open(path)?))?;
        }
        None => {
            info!("Reading commands from stdin");
            interpreter.run(stdin().lock())?;
        }
    }
    info!("Finished with images {:?}", interpreter.store().names());

    Ok(())
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(err) = run_script(&parsed_opts) {
        error!("Could not run script, reason {:?}", err);
        exit(-1);
    }
}
