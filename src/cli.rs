use crate::image::reader::{ResampleFilter, Size};
use crate::image::Validation;
use crate::pixel_art::{DEFAULT_DURATION, DEFAULT_SCALE};
use crate::Arguments;
use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches,
    Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_size_argument(command);
        let command = Self::register_resample_filter_argument(command);
        let command = Self::register_scale_argument(command);
        let command = Self::register_animation_argument(command);
        let command = Self::register_duration_argument(command);
        Self::register_strict_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_size_argument(command: Command) -> Command {
        command.arg(Self::create_size_argument())
    }

    fn register_resample_filter_argument(command: Command) -> Command {
        command.arg(Self::create_resample_filter_argument())
    }

    fn register_scale_argument(command: Command) -> Command {
        command.arg(Self::create_scale_argument())
    }

    fn register_animation_argument(command: Command) -> Command {
        command.arg(Self::create_animation_argument())
    }

    fn register_duration_argument(command: Command) -> Command {
        command.arg(Self::create_duration_argument())
    }

    fn register_strict_argument(command: Command) -> Command {
        command.arg(Self::create_strict_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the image or animation to load")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to write the PNG image or GIF animation to")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_size_argument() -> Arg {
        arg!(size: -s --size <SIZE> "Resize on load, given as WIDTHxHEIGHT")
            .required(false)
            .value_parser(value_parser!(Size))
    }

    fn create_resample_filter_argument() -> Arg {
        arg!(resample_filter: -f --filter <FILTER> "Resample filter used when resizing")
            .default_value("Lanczos")
            .value_parser(value_parser!(ResampleFilter))
    }

    fn create_scale_argument() -> Arg {
        arg!(scale: -x --scale <SCALE> "Turn every pixel into a SCALE by SCALE square")
            .default_value(DEFAULT_SCALE.to_string())
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_animation_argument() -> Arg {
        arg!(animation: -a --animation "Load every frame and save a looping GIF")
            .action(ArgAction::SetTrue)
    }

    fn create_duration_argument() -> Arg {
        arg!(duration: -d --duration <MILLISECONDS> "Time each animation frame is shown")
            .default_value(DEFAULT_DURATION.to_string())
            .value_parser(value_parser!(u32))
    }

    fn create_strict_argument() -> Arg {
        arg!(strict: --strict "Refuse to save pixels with components outside of 0 to 255")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            size: Self::extract_size_argument(matches),
            resample_filter: Self::extract_resample_filter_argument(matches),
            scale: Self::extract_scale_argument(matches),
            animation: Self::extract_animation_argument(matches),
            duration: Self::extract_duration_argument(matches),
            validation: Self::extract_strict_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_size_argument(matches: &ArgMatches) -> Option<Size> {
        matches.get_one::<Size>("size").copied()
    }

    fn extract_resample_filter_argument(matches: &ArgMatches) -> ResampleFilter {
        matches
            .get_one::<ResampleFilter>("resample_filter")
            .expect("Resample filter must be provided, but was unset.")
            .to_owned()
    }

    fn extract_scale_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("scale")
            .expect("Scale must be provided, but was unset.")
            .to_owned()
    }

    fn extract_animation_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("animation")
    }

    fn extract_duration_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("duration")
            .expect("Duration must be provided, but was unset.")
            .to_owned()
    }

    fn extract_strict_argument(matches: &ArgMatches) -> Validation {
        if matches.get_flag("strict") {
            Validation::Strict
        } else {
            Validation::Permissive
        }
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, ResampleFilter, Size, Validation};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "cat.jpg";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_output_file_argument() {
        let output_file_name = "cat.png";
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, output_file_name]);
        let output_file = CLIParser::extract_output_file_argument(&matches);
        assert_eq!(output_file.file_name().unwrap(), output_file_name);
    }

    #[test]
    fn parse_size_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_size_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--size", "16x8"]);
        let size = CLIParser::extract_size_argument(&matches);
        assert_eq!(size, Some(Size::new(16, 8)));
    }

    #[test]
    fn parse_malformed_size_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_size_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-s", "sixteen"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Malformed size not detected");
        }
    }

    #[test]
    fn parse_resample_filter_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_resample_filter_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "Nearest"]);
        let filter = CLIParser::extract_resample_filter_argument(&matches);
        assert_eq!(filter, ResampleFilter::Nearest);
    }

    #[test]
    fn parse_scale_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_scale_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--scale", "10"]);
        assert_eq!(CLIParser::extract_scale_argument(&matches), 10);
    }

    #[test]
    fn parse_zero_scale_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_scale_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--scale", "0"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for scale not detected");
        }
    }

    #[test]
    fn parse_animation_and_duration_arguments() {
        let command = Command::new("test");
        let command = CLIParser::register_animation_argument(command);
        let command = CLIParser::register_duration_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-a", "--duration", "300"]);
        assert!(CLIParser::extract_animation_argument(&matches));
        assert_eq!(CLIParser::extract_duration_argument(&matches), 300);
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.jpg";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.png";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            &output_file_path,
        ]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert_eq!(arguments.size, None, "size does not match");
        assert_eq!(
            arguments.resample_filter,
            ResampleFilter::Lanczos,
            "resample_filter does not match"
        );
        assert_eq!(arguments.scale, 1, "scale does not match");
        assert!(!arguments.animation, "animation does not match");
        assert_eq!(arguments.duration, 100, "duration does not match");
        assert_eq!(
            arguments.validation,
            Validation::Permissive,
            "validation does not match"
        );
    }

    #[test]
    fn parse_strict_flag() {
        let mut cli_parser = CLIParser::default();
        let arguments =
            cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "in.png", "out.png", "--strict"]);
        assert_eq!(arguments.validation, Validation::Strict);
    }
}
