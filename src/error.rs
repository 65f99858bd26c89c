use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownSymbol(char),
    MalformedStream(usize, &'static str),
    InvalidBitCharacter(char, usize),
    CapacityExceeded(usize),
    WordNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInput(String, std::io::Error),
    FailedToWriteOutput(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input text is empty, there are no symbols to encode")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {:?} not present in code table", symbol)
            }
            Self::MalformedStream(position, reason) => {
                write!(f, "Malformed bit stream at bit {}: {}", position, reason)
            }
            Self::InvalidBitCharacter(character, position) => {
                write!(
                    f,
                    "Character {:?} at position {} is not a bit, expected '0' or '1'",
                    character, position
                )
            }
            Self::CapacityExceeded(capacity) => {
                write!(
                    f,
                    "Edit distance index is full, capacity of {} words exhausted",
                    capacity
                )
            }
            Self::WordNotFound(word) => {
                write!(f, "Word '{}' not found", word)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInput(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutput(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToReadInput(_, error)
            | Self::FailedToWriteOutput(_, error) => Some(error),
            _ => None,
        }
    }
}
