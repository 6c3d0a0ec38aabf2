/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Runs script commands against an image store
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info, warn};
use retouch_image::codecs::ppm::load_ppm_with_options;
use retouch_image::codecs::ImageFormat;
use retouch_image::errors::ImageErrors;
use retouch_image::image::Image;
use retouch_image::store::ImageStore;
use retouch_image::traits::OperationsTrait;
use retouch_imageprocs::brighten::Brighten;
use retouch_imageprocs::color_matrix::ColorMatrix;
use retouch_imageprocs::convolve::Convolve;
use retouch_imageprocs::flip::{Flip, FlipDirection};
use retouch_imageprocs::grayscale::GrayScale;

use crate::cmd_parsers::commands::{parse_command, ScriptCommand, ScriptErrors};
use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::HistogramReport;

/// Executes script commands, writing one message per command to `output`
pub struct Interpreter<'a, W: Write> {
    store:   ImageStore,
    options: &'a CmdOptions,
    output:  W
}

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn new(options: &'a CmdOptions, output: W) -> Interpreter<'a, W> {
        Interpreter {
            store: ImageStore::new(),
            options,
            output
        }
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Run commands from `reader` until it is exhausted or a quit command is seen
    ///
    /// A failing command is reported and the next one runs.
    ///
    /// # Errors
    /// Only if reading the script or writing messages fails
    pub fn run<R: BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;

            let message = match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(ScriptCommand::Quit)) => {
                    writeln!(self.output, "you quit the program.")?;
                    return Ok(());
                }
                Ok(Some(command)) => {
                    debug!("Line {}: {:?}", line_number + 1, command);
                    self.execute(command)
                }
                Err(err) => Err(err)
            };
            match message {
                Ok(message) => writeln!(self.output, "{message}")?,
                Err(err) => {
                    warn!(
                        "Line {} failed on {:?}: {:?}",
                        line_number + 1,
                        err.subject().unwrap_or_default(),
                        line.trim()
                    );
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(())
    }

    /// Execute one command returning the message to show
    pub fn execute(&self, command: ScriptCommand) -> Result<String, ScriptErrors> {
        match command {
            ScriptCommand::Load { path, name } => {
                let image = self.load(&path).ok_or(ScriptErrors::LoadFailed(path))?;

                self.store.put(&name, image);
                Ok(format!("{name} was successfully loaded"))
            }
            ScriptCommand::Save {
                name,
                destination,
                format
            } => {
                let image = self
                    .store
                    .get(&name)
                    .ok_or_else(|| missing("save", &name))?;

                let path = format!("{destination}.{}", format.extension());
                self.check_overwrite(&path)?;

                image
                    .save(&path, format)
                    .map_err(|err| ScriptErrors::Image("save", err))?;

                Ok(format!("{name} was successfully saved to {path}"))
            }
            ScriptCommand::Flip {
                direction,
                source,
                destination
            } => {
                self.apply(&source, &destination, &Flip::new(direction), "flip")?;

                let adverb = match direction {
                    FlipDirection::Horizontal => "horizontally",
                    FlipDirection::Vertical => "vertically"
                };
                Ok(format!("{source} was successfully {adverb} flipped"))
            }
            ScriptCommand::GrayScale {
                method,
                source,
                destination
            } => {
                self.apply(&source, &destination, &GrayScale::new(method), "grayscale")?;

                Ok(format!(
                    "{source} was successfully processed using {} grayscale",
                    method.name()
                ))
            }
            ScriptCommand::Brightness {
                increment,
                source,
                destination
            } => {
                self.apply(&source, &destination, &Brighten::new(increment), "brightness")?;

                if increment < 0 {
                    Ok(format!("{source} was successfully darkened by {increment}"))
                } else {
                    Ok(format!("{source} was successfully brightened by {increment}"))
                }
            }
            ScriptCommand::Quality {
                kernel,
                source,
                destination
            } => {
                self.apply(&source, &destination, &Convolve::new(kernel), "quality")?;

                Ok(format!("{source} was successfully blurred/sharpened"))
            }
            ScriptCommand::Filter {
                filter,
                source,
                destination
            } => {
                self.apply(&source, &destination, &ColorMatrix::new(filter), "filter")?;

                Ok(format!("{source} was successfully filtered"))
            }
            ScriptCommand::Histogram {
                channel,
                source,
                output
            } => {
                let image = self
                    .store
                    .get(&source)
                    .ok_or_else(|| missing("histogram", &source))?;

                let histogram = image.histogram(channel);
                let report = HistogramReport::new(&source, &image, &histogram);

                let json = serde_json::to_string_pretty(&report)
                    .map_err(|err| ScriptErrors::Serialization(err.to_string()))?;

                self.check_overwrite(&output)?;

                std::fs::write(&output, json)
                    .map_err(|err| ScriptErrors::Image("histogram", err.into()))?;

                Ok(format!("{source} {channel} histogram was written to {output}"))
            }
            ScriptCommand::Quit => Ok(String::new())
        }
    }

    fn apply(
        &self, source: &str, destination: &str, operation: &dyn OperationsTrait,
        command: &'static str
    ) -> Result<(), ScriptErrors> {
        self.store
            .apply(source, destination, operation)
            .map(|_| ())
            .map_err(|err| ScriptErrors::Image(command, err))
    }

    fn check_overwrite(&self, path: &str) -> Result<(), ScriptErrors> {
        if Path::new(path).exists() {
            if !self.options.override_files {
                return Err(ScriptErrors::FileExists(path.to_string()));
            }
            info!("Overwriting {}", path);
        }
        Ok(())
    }

    fn load(&self, path: &str) -> Option<Image> {
        let options = self.options.decoder_options();

        match ImageFormat::from_path(path) {
            Some(ImageFormat::PPM) => load_ppm_with_options(path, options),
            Some(_) => Image::open(path, options)
                .map_err(|err| warn!("Could not load {}: {}", path, err.to_string().trim_end()))
                .ok(),
            None => {
                warn!("{} has no supported extension", path);
                None
            }
        }
    }
}

fn missing(command: &'static str, name: &str) -> ScriptErrors {
    ScriptErrors::Image(command, ImageErrors::NoSuchImage(name.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use retouch_core::pixel::Pixel;
    use retouch_image::codecs::ppm::save_ppm;
    use retouch_image::image::Image;

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::script::Interpreter;

    /// A fresh directory holding `koala.ppm`, a 2x2 image
    fn workspace(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("retouch-bin-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let pixels = vec![
            Pixel::new(1, 2, 3),
            Pixel::new(4, 5, 6),
            Pixel::new(7, 8, 9),
            Pixel::new(10, 11, 12),
        ];
        let image = Image::new(2, 2, 255, pixels).unwrap();
        std::fs::write(dir.join("koala.ppm"), save_ppm(&image).unwrap()).unwrap();

        dir
    }

    fn run(options: &CmdOptions, script: &str) -> Vec<String> {
        let mut output = vec![];
        Interpreter::new(options, &mut output)
            .run(Cursor::new(script))
            .unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn load_edit_save() {
        let dir = workspace("load-edit-save");
        let d = dir.display();
        let script = format!(
            "load {d}/koala.ppm koala
             brightness 200 koala koala-bright
             grayscale red koala koala-red
             flip horizontal koala-red koala-red-flipped
             save koala-bright {d}/bright ppm
             q
             save koala {d}/never ppm"
        );
        let messages = run(&CmdOptions::new(), &script);

        assert_eq!(
            messages,
            [
                "koala was successfully loaded".to_string(),
                "koala was successfully brightened by 200".to_string(),
                "koala was successfully processed using red grayscale".to_string(),
                "koala-red was successfully horizontally flipped".to_string(),
                format!("koala-bright was successfully saved to {d}/bright.ppm"),
                "you quit the program.".to_string()
            ]
        );
        let saved = std::fs::read_to_string(dir.join("bright.ppm")).unwrap();
        assert!(saved.starts_with("P3\n2 2\n255\n201\n202\n203\n"));
        assert!(!dir.join("never.ppm").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failures_do_not_stop_the_script() {
        let dir = workspace("failures");
        let d = dir.display();
        let script = format!(
            "load {d}/missing.ppm koala
             rotate koala
             grayscale purple koala out
             flip vertical nothing out
             load {d}/koala.ppm koala
             filter sepia koala koala-sepia"
        );
        let mut output = vec![];
        let options = CmdOptions::new();
        let mut interpreter = Interpreter::new(&options, &mut output);
        interpreter.run(Cursor::new(script)).unwrap();

        let names = interpreter.store().names();
        drop(interpreter);
        let messages = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = messages.lines().collect();

        assert_eq!(
            lines[0],
            "load unsuccessful: file type is not a ppm or file name does not exist"
        );
        assert_eq!(lines[1], "Unknown command. Try again");
        assert!(lines[2].starts_with("grayscale unsuccessful"));
        assert!(lines[3].starts_with("flip unsuccessful"));
        assert_eq!(lines[5], "koala was successfully filtered");
        assert_eq!(names, ["koala", "koala-sepia"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_refuses_to_overwrite() {
        let dir = workspace("overwrite");
        let d = dir.display();
        let script = format!(
            "load {d}/koala.ppm koala
             save koala {d}/koala ppm"
        );

        let messages = run(&CmdOptions::new(), &script);
        assert_eq!(messages[1], "same file name exists save failed");

        let mut options = CmdOptions::new();
        options.override_files = true;

        let messages = run(&options, &script);
        assert_eq!(messages[1], format!("koala was successfully saved to {d}/koala.ppm"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn raster_round_trip() {
        let dir = workspace("raster");
        let d = dir.display();
        let script = format!(
            "load {d}/koala.ppm koala
             save koala {d}/koala png
             load {d}/koala.png koala-png
             quality blur koala-png koala-blur"
        );
        let messages = run(&CmdOptions::new(), &script);

        assert_eq!(messages[2], "koala-png was successfully loaded");
        assert_eq!(messages[3], "koala-png was successfully blurred/sharpened");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn histogram_export() {
        let dir = workspace("histogram");
        let d = dir.display();
        let script = format!(
            "load {d}/koala.ppm koala
             histogram red koala {d}/red.json"
        );
        let messages = run(&CmdOptions::new(), &script);

        assert_eq!(
            messages[1],
            format!("koala red histogram was written to {d}/red.json")
        );
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("red.json")).unwrap()).unwrap();

        assert_eq!(json["histogram"]["buckets"][1], 1);
        assert_eq!(json["histogram"]["buckets"][10], 1);
        assert_eq!(json["histogram"]["total"], 4);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
