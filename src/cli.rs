use crate::spelling::DEFAULT_TOLERANCE;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

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
        let command = Self::register_dictionary_file_argument(command);
        let command = Self::register_document_file_argument(command);
        let command = Self::register_tolerance_argument(command);
        let command = Self::register_spell_check_argument(command);
        let command = Self::register_replace_argument(command);
        let command = Self::register_delete_argument(command);
        let command = Self::register_encoded_output_argument(command);
        let command = Self::register_decoded_output_argument(command);
        let command = Self::register_packed_output_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_dictionary_file_argument(command: Command) -> Command {
        command.arg(Self::create_dictionary_file_argument())
    }

    fn register_document_file_argument(command: Command) -> Command {
        command.arg(Self::create_document_file_argument())
    }

    fn register_tolerance_argument(command: Command) -> Command {
        command.arg(Self::create_tolerance_argument())
    }

    fn register_spell_check_argument(command: Command) -> Command {
        command.arg(Self::create_spell_check_argument())
    }

    fn register_replace_argument(command: Command) -> Command {
        command.arg(Self::create_replace_argument())
    }

    fn register_delete_argument(command: Command) -> Command {
        command.arg(Self::create_delete_argument())
    }

    fn register_encoded_output_argument(command: Command) -> Command {
        command.arg(Self::create_encoded_output_argument())
    }

    fn register_decoded_output_argument(command: Command) -> Command {
        command.arg(Self::create_decoded_output_argument())
    }

    fn register_packed_output_argument(command: Command) -> Command {
        command.arg(Self::create_packed_output_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_dictionary_file_argument() -> Arg {
        Arg::new("dictionary_file")
            .help("Path to the dictionary, whitespace separated words")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_document_file_argument() -> Arg {
        Arg::new("document_file")
            .help("Path to the document, whitespace separated words")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_tolerance_argument() -> Arg {
        arg!(-t --tolerance <TOL> "Maximum edit distance of spelling suggestions")
            .default_value(DEFAULT_TOLERANCE.to_string())
            .value_parser(value_parser!(usize))
    }

    fn create_spell_check_argument() -> Arg {
        arg!(spell_check: -s --spell_check "Spell check every word of the document")
    }

    fn create_replace_argument() -> Arg {
        arg!(replace: -r --replace <WORDS> "Replace all occurrences of OLD by NEW")
            .value_names(["OLD", "NEW"])
            .num_args(2)
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_delete_argument() -> Arg {
        arg!(delete: -x --delete <WORD> "Delete the last occurrence of WORD")
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_encoded_output_argument() -> Arg {
        arg!(encoded_output: -e --encoded_output <FILE> "Path to the encoded bits output file")
            .default_value("encode.txt")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_decoded_output_argument() -> Arg {
        arg!(decoded_output: -d --decoded_output <FILE> "Path to the decoded text output file")
            .default_value("decode.txt")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_packed_output_argument() -> Arg {
        arg!(packed_output: -p --packed_output <FILE> "Path to the packed binary output file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-j --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            dictionary_file: Self::extract_dictionary_file_argument(matches),
            document_file: Self::extract_document_file_argument(matches),
            tolerance: Self::extract_tolerance_argument(matches),
            spell_check: Self::extract_spell_check_argument(matches),
            replacements: Self::extract_replace_argument(matches),
            deletions: Self::extract_delete_argument(matches),
            encoded_output_file: Self::extract_encoded_output_argument(matches),
            decoded_output_file: Self::extract_decoded_output_argument(matches),
            packed_output_file: Self::extract_packed_output_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_dictionary_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("dictionary_file")
            .expect("Required argument dictionary_file not provided")
            .clone()
    }

    fn extract_document_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("document_file")
            .expect("Required argument document_file not provided")
            .clone()
    }

    fn extract_tolerance_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("tolerance")
            .expect("Tolerance must be provided, but was unset.")
            .to_owned()
    }

    fn extract_spell_check_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("spell_check")
    }

    fn extract_replace_argument(matches: &ArgMatches) -> Vec<(String, String)> {
        matches
            .get_occurrences::<String>("replace")
            .map(|occurrences| {
                occurrences
                    .filter_map(|mut words| Some((words.next()?.clone(), words.next()?.clone())))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn extract_delete_argument(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("delete")
            .map(|words| words.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_encoded_output_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("encoded_output")
            .expect("Encoded output file must be provided, but was unset.")
            .clone()
    }

    fn extract_decoded_output_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("decoded_output")
            .expect("Decoded output file must be provided, but was unset.")
            .clone()
    }

    fn extract_packed_output_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("packed_output").cloned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::CLIParser;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_dictionary_file_argument() {
        let dictionary_file_name = "words.txt";
        let command = Command::new("test");
        let command = CLIParser::register_dictionary_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, dictionary_file_name]);
        let dictionary_file = CLIParser::extract_dictionary_file_argument(&matches);
        assert_eq!(dictionary_file.file_name().unwrap(), dictionary_file_name);
    }

    #[test]
    fn parse_tolerance_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tolerance_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--tolerance", "3"]);
        assert_eq!(CLIParser::extract_tolerance_argument(&matches), 3);
    }

    #[test]
    fn parse_tolerance_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tolerance_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-t", "three"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for tolerance not detected");
        }
    }

    #[test]
    fn parse_spell_check_flag() {
        let command = Command::new("test");
        let command = CLIParser::register_spell_check_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-s"]);
        assert!(CLIParser::extract_spell_check_argument(&matches));
    }

    #[test]
    fn parse_replace_arguments() {
        let command = Command::new("test");
        let command = CLIParser::register_replace_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--replace",
            "teh",
            "the",
            "-r",
            "adn",
            "and",
        ]);
        let replacements = CLIParser::extract_replace_argument(&matches);
        assert_eq!(
            replacements,
            vec![
                ("teh".to_string(), "the".to_string()),
                ("adn".to_string(), "and".to_string())
            ]
        );
    }

    #[test]
    fn parse_replace_with_missing_new_word() {
        let command = Command::new("test");
        let command = CLIParser::register_replace_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-r", "teh"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::WrongNumberOfValues);
        } else {
            panic!("Missing replacement word not detected");
        }
    }

    #[test]
    fn parse_delete_arguments() {
        let command = Command::new("test");
        let command = CLIParser::register_delete_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-x", "very", "--delete", "so"]);
        let deletions = CLIParser::extract_delete_argument(&matches);
        assert_eq!(deletions, vec!["very", "so"]);
    }

    #[test]
    fn parse_packed_output_absent() {
        let command = Command::new("test");
        let command = CLIParser::register_packed_output_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(CLIParser::extract_packed_output_argument(&matches).is_none());
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_required_arguments_only() {
        let dictionary_file_name = "dictionary.txt";
        let dictionary_file_path = format!("/input_directory/{}", dictionary_file_name);
        let document_file_name = "document.txt";
        let document_file_path = format!("/input_directory/{}", document_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &dictionary_file_path,
            &document_file_path,
            "-j",
            "8",
        ]);
        assert_eq!(
            arguments.dictionary_file.file_name().unwrap(),
            dictionary_file_name,
            "dictionary file does not match"
        );
        assert_eq!(
            arguments.document_file.file_name().unwrap(),
            document_file_name,
            "document file does not match"
        );
        assert_eq!(arguments.tolerance, 2, "tolerance does not match");
        assert!(!arguments.spell_check, "spell_check does not match");
        assert!(arguments.replacements.is_empty(), "replacements do not match");
        assert!(arguments.deletions.is_empty(), "deletions do not match");
        assert_eq!(
            arguments.encoded_output_file.file_name().unwrap(),
            "encode.txt",
            "encoded output file does not match"
        );
        assert_eq!(
            arguments.decoded_output_file.file_name().unwrap(),
            "decode.txt",
            "decoded output file does not match"
        );
        assert!(
            arguments.packed_output_file.is_none(),
            "packed output file does not match"
        );
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
    }
}
