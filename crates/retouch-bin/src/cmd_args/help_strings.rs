/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static SCRIPT_HELP: &str = "Script file to read commands from

Each line holds one command, blank lines and lines starting with
'#' are skipped. Without this option commands are read from stdin.";

pub static STRICT_HELP: &str = "Treat most warnings as errors

In strict mode ppm files with samples above their max value or
with data after the last sample are rejected instead of
being clamped or ignored.";

pub static OVERWRITE_HELP: &str = "Overwrite existing files when saving

By default save and histogram refuse to replace a file that
already exists.";

pub static AFTER_HELP: &str = "COMMANDS:
  load <path> <name>                                      Load a ppm, png, jpg or bmp file
  save <name> <destination> <ppm|png|jpg|bmp>             Save to <destination>.<format>
  flip <horizontal|vertical> <source> <destination>
  grayscale <red|green|blue|value|intensity|luma> <source> <destination>
  brightness <amount> <source> <destination>              Negative amounts darken
  quality <blur|sharpen> <source> <destination>
  filter <sepia|luma> <source> <destination>
  histogram <red|green|blue|intensity> <source> <output.json>
  q | quit                                                Stop reading commands";
