/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Script command parsing
//!
//! A command is a keyword followed by whitespace separated arguments,
//! every variant argument is turned into its enum here so a bad
//! argument is reported before any image is touched.
use std::fmt::{Debug, Display, Formatter};

use retouch_image::codecs::ImageFormat;
use retouch_image::errors::ImageErrors;
use retouch_image::histogram::HistogramChannel;
use retouch_imageprocs::color_matrix::ColorFilter;
use retouch_imageprocs::convolve::Kernel;
use retouch_imageprocs::flip::FlipDirection;
use retouch_imageprocs::grayscale::GrayScaleMethod;

#[derive(Clone, Debug, PartialEq)]
pub enum ScriptCommand {
    Load {
        path: String,
        name: String
    },
    Save {
        name:        String,
        destination: String,
        format:      ImageFormat
    },
    Flip {
        direction:   FlipDirection,
        source:      String,
        destination: String
    },
    GrayScale {
        method:      GrayScaleMethod,
        source:      String,
        destination: String
    },
    Brightness {
        increment:   i32,
        source:      String,
        destination: String
    },
    Quality {
        kernel:      Kernel,
        source:      String,
        destination: String
    },
    Filter {
        filter:      ColorFilter,
        source:      String,
        destination: String
    },
    Histogram {
        channel: HistogramChannel,
        source:  String,
        output:  String
    },
    Quit
}

/// Reasons a script command did not complete
pub enum ScriptErrors {
    UnknownCommand(String),
    /// Command name and the number of arguments it takes
    MissingArguments(&'static str, usize),
    InvalidInteger(String),
    UnsupportedFileType(String),
    LoadFailed(String),
    FileExists(String),
    Serialization(String),
    Image(&'static str, ImageErrors)
}

impl Debug for ScriptErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(_) => write!(f, "Unknown command. Try again"),
            Self::MissingArguments(command, count) => {
                write!(f, "{command} takes {count} arguments. Try again")
            }
            Self::InvalidInteger(value) => write!(f, "'{value}' is not an integer. Try again"),
            Self::UnsupportedFileType(_) => write!(f, "file type not supported"),
            Self::LoadFailed(_) => write!(
                f,
                "load unsuccessful: file type is not a ppm or file name does not exist"
            ),
            Self::FileExists(_) => write!(f, "same file name exists save failed"),
            Self::Serialization(err) => write!(f, "could not serialize histogram: {err}"),
            Self::Image(command, err) => {
                write!(f, "{command} unsuccessful: {}", err.to_string().trim_end())
            }
        }
    }
}

impl Display for ScriptErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ScriptErrors {}

impl ScriptErrors {
    /// The token, path or image name the error is about, if any
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnknownCommand(value)
            | Self::InvalidInteger(value)
            | Self::UnsupportedFileType(value)
            | Self::LoadFailed(value)
            | Self::FileExists(value) => Some(value.as_str()),
            Self::MissingArguments(command, _) | Self::Image(command, _) => Some(*command),
            Self::Serialization(_) => None
        }
    }
}

fn expect_args(command: &'static str, args: &[&str], count: usize) -> Result<(), ScriptErrors> {
    if args.len() < count {
        return Err(ScriptErrors::MissingArguments(command, count));
    }
    Ok(())
}

fn parse_variant<T>(command: &'static str, value: &str) -> Result<T, ScriptErrors>
where
    T: std::str::FromStr<Err = ImageErrors>
{
    value.parse::<T>().map_err(|err| ScriptErrors::Image(command, err))
}

/// Parse one script line
///
/// Returns `None` for blank lines and comments. Arguments after the
/// ones a command takes are ignored.
pub fn parse_command(line: &str) -> Result<Option<ScriptCommand>, ScriptErrors> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };
    if keyword.starts_with('#') {
        return Ok(None);
    }

    let command = match *keyword {
        "q" | "Q" | "quit" | "Quit" => ScriptCommand::Quit,
        "load" => {
            expect_args("load", args, 2)?;
            ScriptCommand::Load {
                path: args[0].to_string(),
                name: args[1].to_string()
            }
        }
        "save" => {
            expect_args("save", args, 3)?;
            let format = ImageFormat::from_extension(args[2])
                .ok_or_else(|| ScriptErrors::UnsupportedFileType(args[2].to_string()))?;

            ScriptCommand::Save {
                name: args[0].to_string(),
                destination: args[1].to_string(),
                format
            }
        }
        "flip" => {
            expect_args("flip", args, 3)?;
            ScriptCommand::Flip {
                direction:   parse_variant("flip", args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "grayscale" => {
            expect_args("grayscale", args, 3)?;
            ScriptCommand::GrayScale {
                method:      parse_variant("grayscale", args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "brightness" => {
            expect_args("brightness", args, 3)?;
            let increment = args[0]
                .parse::<i32>()
                .map_err(|_| ScriptErrors::InvalidInteger(args[0].to_string()))?;

            ScriptCommand::Brightness {
                increment,
                source: args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "quality" => {
            expect_args("quality", args, 3)?;
            ScriptCommand::Quality {
                kernel:      parse_variant("quality", args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "filter" => {
            expect_args("filter", args, 3)?;
            ScriptCommand::Filter {
                filter:      parse_variant("filter", args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "histogram" => {
            expect_args("histogram", args, 3)?;
            ScriptCommand::Histogram {
                channel: parse_variant("histogram", args[0])?,
                source:  args[1].to_string(),
                output:  args[2].to_string()
            }
        }
        unknown => return Err(ScriptErrors::UnknownCommand(unknown.to_string()))
    };
    Ok(Some(command))
}
